//! Storage seam for uploaded ad images.
//!
//! The submission pipeline only sees the [`AssetStore`] trait; the production
//! implementation writes files under a media directory served by the HTTP
//! layer and hands back the public URL as the retrieval locator.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::domain::types::ImageUrl;

#[cfg(test)]
pub mod test;

/// A validated image ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Client-supplied file name; only its extension is trusted.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum AssetStoreError {
    #[error("failed to write asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("asset file name has no extension")]
    MissingExtension,
}

/// Persists uploaded images and returns a stable retrieval locator.
pub trait AssetStore {
    fn store_image(&self, upload: ImageUpload) -> Result<ImageUrl, AssetStoreError>;
}

/// Filesystem-backed asset store.
///
/// Files are renamed to a fresh UUID so client-supplied names never reach the
/// disk or the rendered pages.
#[derive(Clone)]
pub struct FsAssetStore {
    root: PathBuf,
    url_prefix: String,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
        }
    }

    /// Create the media directory if it does not exist yet.
    pub fn ensure_root(&self) -> Result<(), AssetStoreError> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

impl AssetStore for FsAssetStore {
    fn store_image(&self, upload: ImageUpload) -> Result<ImageUrl, AssetStoreError> {
        let extension = Path::new(&upload.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or(AssetStoreError::MissingExtension)?;

        let stored_name = format!("{}.{extension}", Uuid::new_v4());
        fs::write(self.root.join(&stored_name), &upload.bytes)?;

        let prefix = self.url_prefix.trim_end_matches('/');
        ImageUrl::new(format!("{prefix}/{stored_name}"))
            .map_err(|e| AssetStoreError::Io(std::io::Error::other(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_file_and_returns_locator() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path(), "/media");

        let url = store
            .store_image(ImageUpload {
                file_name: "cat.PNG".to_string(),
                bytes: vec![1, 2, 3],
            })
            .unwrap();

        assert!(url.as_str().starts_with("/media/"));
        assert!(url.as_str().ends_with(".png"));

        let stored = dir.path().join(url.as_str().trim_start_matches("/media/"));
        assert_eq!(fs::read(stored).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn rejects_name_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path(), "/media");

        let err = store
            .store_image(ImageUpload {
                file_name: "image".to_string(),
                bytes: vec![],
            })
            .unwrap_err();
        assert!(matches!(err, AssetStoreError::MissingExtension));
    }
}
