use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::domain::ad::{Ad, NewAd};
use crate::domain::types::PhoneNumber;
use crate::models::ad::{Ad as DbAd, NewAd as DbNewAd};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AdListQuery, AdReader, AdSortOrder, AdWriter, DieselRepository};

diesel::define_sql_function! {
    fn lower(x: Text) -> Text;
}

impl AdReader for DieselRepository {
    fn list_ads(&self, query: AdListQuery) -> RepositoryResult<Vec<Ad>> {
        use crate::schema::ads;

        let mut conn = self.conn()?;

        let mut items = ads::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(city) = &query.city {
            items = items.filter(lower(ads::city).eq(city.trim().to_lowercase()));
        }

        match query.sort {
            Some(AdSortOrder::NewestFirst) => items = items.order(ads::created_at.desc()),
            Some(AdSortOrder::OldestFirst) => items = items.order(ads::created_at.asc()),
            None => {}
        }

        let items = items
            .load::<DbAd>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Ad>, _>>()?;

        Ok(items)
    }

    fn count_ads_by_phone(&self, phone: &PhoneNumber) -> RepositoryResult<usize> {
        use crate::schema::ads;

        let mut conn = self.conn()?;

        let total = ads::table
            .filter(ads::phone.eq(phone.as_str()))
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        Ok(total)
    }
}

impl AdWriter for DieselRepository {
    fn create_ad(&self, ad: &NewAd) -> RepositoryResult<usize> {
        use crate::schema::ads;

        let mut conn = self.conn()?;
        let db_ad: DbNewAd = ad.clone().into();

        let affected = diesel::insert_into(ads::table)
            .values(db_ad)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
