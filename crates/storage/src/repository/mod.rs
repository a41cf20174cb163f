use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::Result;
use crate::geo::Coordinate;
use crate::models::{CheckIn, Gym, NewCheckIn, NewGym};

pub mod check_in;
pub mod gym;
pub mod memory;

pub use check_in::PgCheckInsRepository;
pub use gym::PgGymsRepository;
pub use memory::{InMemoryCheckInsRepository, InMemoryGymsRepository};

/// Fixed number of records per page for paginated listings.
pub const PAGE_SIZE: u32 = 20;

/// Radius within which a gym counts as nearby.
pub const NEARBY_RADIUS_KM: f64 = 10.0;

/// Zero-based row offset of a 1-indexed page.
pub fn page_offset(page: u32) -> i64 {
    i64::from(page.saturating_sub(1)) * i64::from(PAGE_SIZE)
}

#[async_trait]
pub trait GymsRepository: Send + Sync {
    async fn create(&self, gym: NewGym) -> Result<Gym>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Gym>>;

    /// Gyms within [`NEARBY_RADIUS_KM`] of `origin`.
    async fn find_many_nearby(&self, origin: Coordinate) -> Result<Vec<Gym>>;

    /// Gyms whose title contains `query`, case-insensitively and taken
    /// literally (`%` and `_` are not wildcards). Ordered by title in byte
    /// order, then by id.
    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>>;
}

#[async_trait]
pub trait CheckInsRepository: Send + Sync {
    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CheckIn>>;

    /// Persist changes to an existing check-in.
    async fn save(&self, check_in: &CheckIn) -> Result<CheckIn>;

    async fn find_by_user_id_on_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>>;

    /// One page of a user's check-ins, oldest first.
    async fn find_many_by_user_id(&self, user_id: Uuid, page: u32) -> Result<Vec<CheckIn>>;

    async fn count_by_user_id(&self, user_id: Uuid) -> Result<i64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), 20);
        assert_eq!(page_offset(0), 0);
    }

    #[test]
    fn test_page_offset_does_not_overflow() {
        assert_eq!(
            page_offset(u32::MAX),
            i64::from(u32::MAX - 1) * i64::from(PAGE_SIZE)
        );
    }
}
