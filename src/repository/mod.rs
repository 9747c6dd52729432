use crate::db::{DbConnection, DbPool};
use crate::domain::ad::{Ad, NewAd};
use crate::domain::types::PhoneNumber;
use crate::repository::errors::RepositoryResult;

pub mod ad;
pub mod errors;
#[cfg(test)]
pub mod test;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Sort direction for listing ads by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdSortOrder {
    NewestFirst,
    OldestFirst,
}

/// Query parameters used when listing ads.
#[derive(Debug, Clone, Default)]
pub struct AdListQuery {
    /// Case-insensitive anchored match against the stored city.
    pub city: Option<String>,
    /// Order by creation time; repository natural order when absent.
    pub sort: Option<AdSortOrder>,
}

impl AdListQuery {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn sort(mut self, sort: AdSortOrder) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Read-only operations for ad entities.
pub trait AdReader {
    /// List ads matching the supplied query parameters.
    fn list_ads(&self, query: AdListQuery) -> RepositoryResult<Vec<Ad>>;
    /// Number of ads stored for the given phone number.
    fn count_ads_by_phone(&self, phone: &PhoneNumber) -> RepositoryResult<usize>;
}

/// Write operations for ad entities.
pub trait AdWriter {
    /// Persist a new ad.
    fn create_ad(&self, ad: &NewAd) -> RepositoryResult<usize>;
}
