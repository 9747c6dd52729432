use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{
    AdId, CategoryLabel, CityName, ImageUrl, PhoneNumber, StreetAddress,
};

/// A classified listing as persisted.
///
/// `category` carries the raw stored label rather than a [`Category`] because
/// rows written before category validation was introduced may hold labels
/// outside the fixed set; such rows survive but are dropped from grouped views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub id: AdId,
    pub phone: PhoneNumber,
    pub city: CityName,
    pub address: Option<StreetAddress>,
    pub category: CategoryLabel,
    /// `None` when the submission carried no image.
    pub image_url: Option<ImageUrl>,
    pub created_at: NaiveDateTime,
}

impl Ad {
    /// The known display category, if the stored label names one.
    pub fn display_category(&self) -> Option<Category> {
        Category::parse(self.category.as_str())
    }
}

/// Information required to create a new [`Ad`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAd {
    pub phone: PhoneNumber,
    pub city: CityName,
    pub address: Option<StreetAddress>,
    pub category: Category,
    pub image_url: Option<ImageUrl>,
    pub created_at: NaiveDateTime,
}
