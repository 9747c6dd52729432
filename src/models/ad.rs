use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::ad::{Ad as DomainAd, NewAd as DomainNewAd};
use crate::domain::types::{
    AdId, CategoryLabel, CityName, ImageUrl, PhoneNumber, StreetAddress, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::ads)]
pub struct Ad {
    pub id: i32,
    pub phone: String,
    pub city: String,
    pub address: Option<String>,
    pub category: String,
    /// Empty string when the submission carried no image.
    pub image_url: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Ad> for DomainAd {
    type Error = TypeConstraintError;

    fn try_from(ad: Ad) -> Result<Self, Self::Error> {
        let address = ad
            .address
            .filter(|a| !a.trim().is_empty())
            .map(StreetAddress::new)
            .transpose()?;
        let image_url = if ad.image_url.trim().is_empty() {
            None
        } else {
            Some(ImageUrl::new(ad.image_url)?)
        };

        Ok(Self {
            id: AdId::new(ad.id)?,
            phone: PhoneNumber::new(ad.phone)?,
            city: CityName::new(ad.city)?,
            address,
            category: CategoryLabel::new(ad.category)?,
            image_url,
            created_at: ad.created_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::ads)]
pub struct NewAd {
    pub phone: String,
    pub city: String,
    pub address: Option<String>,
    pub category: String,
    pub image_url: String,
    pub created_at: NaiveDateTime,
}

impl From<DomainNewAd> for NewAd {
    fn from(ad: DomainNewAd) -> Self {
        Self {
            phone: ad.phone.into_inner(),
            city: ad.city.into_inner(),
            address: ad.address.map(StreetAddress::into_inner),
            category: ad.category.as_str().to_string(),
            image_url: ad
                .image_url
                .map(ImageUrl::into_inner)
                .unwrap_or_default(),
            created_at: ad.created_at,
        }
    }
}
