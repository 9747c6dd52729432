use std::cell::RefCell;

use crate::assets::{AssetStore, AssetStoreError, ImageUpload};
use crate::domain::types::ImageUrl;

/// In-memory asset store used for unit tests. Records every stored upload.
#[derive(Default)]
pub struct TestAssetStore {
    pub stored: RefCell<Vec<ImageUpload>>,
}

impl TestAssetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssetStore for TestAssetStore {
    fn store_image(&self, upload: ImageUpload) -> Result<ImageUrl, AssetStoreError> {
        let url = ImageUrl::new(format!("/media/test-{}.img", self.stored.borrow().len()))
            .map_err(|e| AssetStoreError::Io(std::io::Error::other(e.to_string())))?;
        self.stored.borrow_mut().push(upload);
        Ok(url)
    }
}
