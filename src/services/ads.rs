//! The ad submission pipeline.

use chrono::Utc;

use crate::assets::{AssetStore, ImageUpload};
use crate::domain::ad::NewAd;
use crate::domain::types::ImageUrl;
use crate::forms::ads::SubmitAdFormPayload;
use crate::repository::{AdReader, AdWriter};

use super::{ServiceError, ServiceResult};

/// Maximum number of ads a single phone number may hold.
pub const MAX_ADS_PER_PHONE: usize = 2;

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Locator of the stored image; `None` when no file was attached.
    pub image_url: Option<ImageUrl>,
}

/// Persist a validated submission.
///
/// The image is stored first, then the per-phone quota is checked and the ad
/// inserted. The two steps are not atomic: a quota rejection after a
/// successful image store leaves the asset orphaned, and concurrent
/// submissions from one phone can race past the count. Both are accepted
/// behavior, not silently papered over.
pub fn submit_ad<R, A>(
    payload: SubmitAdFormPayload,
    image: Option<ImageUpload>,
    repo: &R,
    assets: &A,
) -> ServiceResult<SubmissionReceipt>
where
    R: AdReader + AdWriter,
    A: AssetStore,
{
    let image_url = match image {
        Some(upload) => match assets.store_image(upload) {
            Ok(url) => Some(url),
            Err(e) => {
                log::error!("Failed to store uploaded image: {e}");
                return Err(ServiceError::Storage);
            }
        },
        None => None,
    };

    let count = match repo.count_ads_by_phone(&payload.phone) {
        Ok(count) => count,
        Err(e) => {
            log::error!("Failed to count ads by phone: {e}");
            return Err(ServiceError::Storage);
        }
    };
    if count >= MAX_ADS_PER_PHONE {
        return Err(ServiceError::QuotaExceeded);
    }

    let new_ad = NewAd {
        phone: payload.phone,
        city: payload.city,
        address: payload.address,
        category: payload.category,
        image_url: image_url.clone(),
        created_at: Utc::now().naive_utc(),
    };

    if let Err(e) = repo.create_ad(&new_ad) {
        log::error!("Failed to persist ad: {e}");
        return Err(ServiceError::Storage);
    }

    Ok(SubmissionReceipt { image_url })
}
