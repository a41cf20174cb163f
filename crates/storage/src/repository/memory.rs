//! Process-local repositories backed by vectors.
//!
//! They follow the same contracts as the PostgreSQL implementations and are
//! what the use-case tests run against.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CheckInsRepository, GymsRepository, NEARBY_RADIUS_KM, PAGE_SIZE, page_offset};
use crate::error::{Result, StorageError};
use crate::geo::{Coordinate, distance_between};
use crate::models::{CheckIn, Gym, NewCheckIn, NewGym};

fn page_of<T>(items: impl Iterator<Item = T>, page: u32) -> Vec<T> {
    items
        .skip(usize::try_from(page_offset(page)).unwrap_or(usize::MAX))
        .take(PAGE_SIZE as usize)
        .collect()
}

#[derive(Default)]
pub struct InMemoryGymsRepository {
    items: RwLock<Vec<Gym>>,
}

impl InMemoryGymsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fully formed gym, keeping its id.
    pub async fn insert(&self, gym: Gym) {
        self.items.write().await.push(gym);
    }
}

#[async_trait]
impl GymsRepository for InMemoryGymsRepository {
    async fn create(&self, gym: NewGym) -> Result<Gym> {
        let gym = Gym {
            id: Uuid::new_v4(),
            title: gym.title,
            description: gym.description,
            phone: gym.phone,
            latitude: gym.latitude,
            longitude: gym.longitude,
        };

        self.items.write().await.push(gym.clone());

        Ok(gym)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Gym>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|gym| gym.id == id).cloned())
    }

    async fn find_many_nearby(&self, origin: Coordinate) -> Result<Vec<Gym>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|gym| distance_between(origin, gym.coordinate()) <= NEARBY_RADIUS_KM)
            .cloned()
            .collect())
    }

    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>> {
        let needle = query.to_lowercase();
        let items = self.items.read().await;
        let mut matching: Vec<Gym> = items
            .iter()
            .filter(|gym| gym.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));

        Ok(page_of(matching.into_iter(), page))
    }
}

#[derive(Default)]
pub struct InMemoryCheckInsRepository {
    items: RwLock<Vec<CheckIn>>,
}

impl InMemoryCheckInsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CheckInsRepository for InMemoryCheckInsRepository {
    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn> {
        let check_in = CheckIn {
            id: Uuid::new_v4(),
            gym_id: check_in.gym_id,
            user_id: check_in.user_id,
            created_at: check_in.created_at,
            validated_at: None,
        };

        self.items.write().await.push(check_in.clone());

        Ok(check_in)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CheckIn>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|check_in| check_in.id == id).cloned())
    }

    async fn save(&self, check_in: &CheckIn) -> Result<CheckIn> {
        let mut items = self.items.write().await;
        let stored = items
            .iter_mut()
            .find(|stored| stored.id == check_in.id)
            .ok_or(StorageError::NotFound)?;

        *stored = check_in.clone();

        Ok(check_in.clone())
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .find(|check_in| check_in.user_id == user_id && check_in.created_at.date() == date)
            .cloned())
    }

    async fn find_many_by_user_id(&self, user_id: Uuid, page: u32) -> Result<Vec<CheckIn>> {
        let items = self.items.read().await;
        let mut owned: Vec<CheckIn> = items
            .iter()
            .filter(|check_in| check_in.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|check_in| check_in.created_at);

        Ok(page_of(owned.into_iter(), page))
    }

    async fn count_by_user_id(&self, user_id: Uuid) -> Result<i64> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|check_in| check_in.user_id == user_id)
            .count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;

    use super::*;

    fn at(date: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn new_gym(title: &str) -> NewGym {
        NewGym {
            title: title.to_string(),
            description: None,
            phone: None,
            latitude: Decimal::ZERO,
            longitude: Decimal::ZERO,
        }
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let repo = InMemoryGymsRepository::new();
        repo.create(new_gym("JavaScript Gym")).await.unwrap();
        repo.create(new_gym("TypeScript Gym")).await.unwrap();

        let found = repo.search_many("javascript", 1).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "JavaScript Gym");
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let repo = InMemoryGymsRepository::new();
        repo.create(new_gym("JavaScript Gym")).await.unwrap();
        repo.create(new_gym("100% Fitness")).await.unwrap();

        let found = repo.search_many("%", 1).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "100% Fitness");

        assert!(repo.search_many("_", 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_orders_by_title() {
        let repo = InMemoryGymsRepository::new();
        repo.create(new_gym("Gym B")).await.unwrap();
        repo.create(new_gym("Gym C")).await.unwrap();
        repo.create(new_gym("Gym A")).await.unwrap();

        let titles: Vec<String> = repo
            .search_many("gym", 1)
            .await
            .unwrap()
            .into_iter()
            .map(|gym| gym.title)
            .collect();

        assert_eq!(titles, ["Gym A", "Gym B", "Gym C"]);
    }

    #[tokio::test]
    async fn test_huge_page_is_empty() {
        let repo = InMemoryCheckInsRepository::new();
        let user_id = Uuid::new_v4();
        repo.create(NewCheckIn {
            gym_id: Uuid::new_v4(),
            user_id,
            created_at: at("2024-01-01 10:00:00"),
        })
        .await
        .unwrap();

        let page = repo.find_many_by_user_id(user_id, u32::MAX).await.unwrap();

        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_save_unknown_check_in_fails() {
        let repo = InMemoryCheckInsRepository::new();
        let check_in = CheckIn {
            id: Uuid::new_v4(),
            gym_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            created_at: at("2024-01-01 10:00:00"),
            validated_at: None,
        };

        let result = repo.save(&check_in).await;

        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_on_date_ignores_other_days_and_users() {
        let repo = InMemoryCheckInsRepository::new();
        let user_id = Uuid::new_v4();
        repo.create(NewCheckIn {
            gym_id: Uuid::new_v4(),
            user_id,
            created_at: at("2024-01-01 23:59:59"),
        })
        .await
        .unwrap();
        repo.create(NewCheckIn {
            gym_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            created_at: at("2024-01-02 08:00:00"),
        })
        .await
        .unwrap();

        let date = at("2024-01-02 12:00:00").date();
        assert!(repo.find_by_user_id_on_date(user_id, date).await.unwrap().is_none());

        let date = at("2024-01-01 00:00:00").date();
        assert!(repo.find_by_user_id_on_date(user_id, date).await.unwrap().is_some());
    }
}
