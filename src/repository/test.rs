use std::cell::RefCell;

use crate::domain::ad::{Ad, NewAd};
use crate::domain::types::{AdId, CategoryLabel, PhoneNumber};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AdListQuery, AdReader, AdSortOrder, AdWriter};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    ads: RefCell<Vec<Ad>>,
}

impl TestRepository {
    pub fn new(ads: Vec<Ad>) -> Self {
        Self {
            ads: RefCell::new(ads),
        }
    }

    pub fn ads(&self) -> Vec<Ad> {
        self.ads.borrow().clone()
    }
}

impl AdReader for TestRepository {
    fn list_ads(&self, query: AdListQuery) -> RepositoryResult<Vec<Ad>> {
        let mut items: Vec<Ad> = self.ads.borrow().clone();

        if let Some(city) = &query.city {
            let city = city.trim().to_lowercase();
            items.retain(|ad| ad.city.as_str().to_lowercase() == city);
        }

        match query.sort {
            Some(AdSortOrder::NewestFirst) => {
                items.sort_by(|a, b| b.created_at.cmp(&a.created_at))
            }
            Some(AdSortOrder::OldestFirst) => {
                items.sort_by(|a, b| a.created_at.cmp(&b.created_at))
            }
            None => {}
        }

        Ok(items)
    }

    fn count_ads_by_phone(&self, phone: &PhoneNumber) -> RepositoryResult<usize> {
        Ok(self
            .ads
            .borrow()
            .iter()
            .filter(|ad| &ad.phone == phone)
            .count())
    }
}

impl AdWriter for TestRepository {
    fn create_ad(&self, ad: &NewAd) -> RepositoryResult<usize> {
        let mut ads = self.ads.borrow_mut();
        let id = AdId::new(ads.len() as i32 + 1).expect("positive test id");
        ads.push(Ad {
            id,
            phone: ad.phone.clone(),
            city: ad.city.clone(),
            address: ad.address.clone(),
            category: CategoryLabel::new(ad.category.as_str()).expect("non-empty label"),
            image_url: ad.image_url.clone(),
            created_at: ad.created_at,
        });
        Ok(1)
    }
}
