//! Grouped-board and city-search queries behind the listing pages.

use serde::Serialize;

use crate::domain::ad::Ad;
use crate::domain::category::Category;
use crate::repository::{AdListQuery, AdReader, AdSortOrder};

use super::{ServiceError, ServiceResult};

/// Template-facing view of a single ad. Plain strings only; escaping happens
/// in the template engine.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AdView {
    pub phone: String,
    pub city: String,
    pub address: String,
    pub category: String,
    pub image_url: String,
}

impl From<Ad> for AdView {
    fn from(ad: Ad) -> Self {
        Self {
            phone: ad.phone.into_inner(),
            city: ad.city.into_inner(),
            address: ad
                .address
                .map(|a| a.into_inner())
                .unwrap_or_default(),
            category: ad.category.into_inner(),
            image_url: ad
                .image_url
                .map(|u| u.into_inner())
                .unwrap_or_default(),
        }
    }
}

/// One display bucket of the grouped board.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Category,
    pub ads: Vec<AdView>,
}

/// Result of a city search.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CitySearch {
    /// The searched term, as entered (lowercased like the original search).
    pub query: String,
    pub ads: Vec<AdView>,
}

/// Fetch all ads in the given order and bucket them by category.
///
/// Every known category yields a bucket, possibly empty, in display order.
/// Ads whose stored label is outside the known set are dropped.
pub fn show_board<R>(order: AdSortOrder, repo: &R) -> ServiceResult<Vec<CategoryGroup>>
where
    R: AdReader,
{
    let ads = match repo.list_ads(AdListQuery::default().sort(order)) {
        Ok(ads) => ads,
        Err(e) => {
            log::error!("Failed to list ads: {e}");
            return Err(ServiceError::Storage);
        }
    };

    Ok(group_by_category(ads))
}

fn group_by_category(ads: Vec<Ad>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Category::ALL
        .into_iter()
        .map(|category| CategoryGroup {
            category,
            ads: Vec::new(),
        })
        .collect();

    for ad in ads {
        if let Some(category) = ad.display_category()
            && let Some(group) = groups.iter_mut().find(|g| g.category == category)
        {
            group.ads.push(ad.into());
        }
    }

    groups
}

/// Find all ads whose city matches the query (case-insensitive, anchored).
///
/// A missing or blank `city` parameter is a caller error; result order is the
/// repository's natural order.
pub fn search_by_city<R>(city: Option<&str>, repo: &R) -> ServiceResult<CitySearch>
where
    R: AdReader,
{
    let city = city
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ServiceError::BadRequest("city query parameter is required".to_string()))?;
    let query = city.to_lowercase();

    let ads = match repo.list_ads(AdListQuery::default().city(city)) {
        Ok(ads) => ads,
        Err(e) => {
            log::error!("Failed to search ads by city: {e}");
            return Err(ServiceError::Storage);
        }
    };

    Ok(CitySearch {
        query,
        ads: ads.into_iter().map(Into::into).collect(),
    })
}
