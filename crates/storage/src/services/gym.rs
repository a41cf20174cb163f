use crate::error::ServiceResult;
use crate::geo::Coordinate;
use crate::models::{Gym, NewGym};
use crate::repository::GymsRepository;

pub struct GymService<'a> {
    gyms: &'a dyn GymsRepository,
}

impl<'a> GymService<'a> {
    pub fn new(gyms: &'a dyn GymsRepository) -> Self {
        Self { gyms }
    }

    /// Register a new gym
    pub async fn create(&self, gym: NewGym) -> ServiceResult<Gym> {
        let gym = self.gyms.create(gym).await?;
        tracing::info!(gym_id = %gym.id, title = %gym.title, "Gym registered");

        Ok(gym)
    }

    /// Search gyms by title
    pub async fn search(&self, query: &str, page: u32) -> ServiceResult<Vec<Gym>> {
        Ok(self.gyms.search_many(query, page).await?)
    }

    /// Gyms close enough to the user to be worth listing
    pub async fn fetch_nearby(&self, user_location: Coordinate) -> ServiceResult<Vec<Gym>> {
        let gyms = self.gyms.find_many_nearby(user_location).await?;
        tracing::debug!(
            latitude = user_location.latitude,
            longitude = user_location.longitude,
            found = gyms.len(),
            "Fetched nearby gyms"
        );

        Ok(gyms)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::repository::InMemoryGymsRepository;

    fn new_gym(title: &str, latitude: &str, longitude: &str) -> NewGym {
        NewGym {
            title: title.to_string(),
            description: None,
            phone: None,
            latitude: latitude.parse::<Decimal>().unwrap(),
            longitude: longitude.parse::<Decimal>().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_gym() {
        let repo = InMemoryGymsRepository::new();
        let service = GymService::new(&repo);

        let gym = service
            .create(new_gym("JavaScript Gym", "53.3803913", "-2.8861104"))
            .await
            .unwrap();

        assert_eq!(gym.title, "JavaScript Gym");
        assert!(repo.find_by_id(gym.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_fetch_nearby_excludes_far_gyms() {
        let repo = InMemoryGymsRepository::new();
        let service = GymService::new(&repo);
        service
            .create(new_gym("Near Gym", "53.3803913", "-2.8861104"))
            .await
            .unwrap();
        service
            .create(new_gym("Far Gym", "53.4769071", "-2.1945393"))
            .await
            .unwrap();

        let gyms = service
            .fetch_nearby(Coordinate::new(53.3803913, -2.8861104))
            .await
            .unwrap();

        assert_eq!(gyms.len(), 1);
        assert_eq!(gyms[0].title, "Near Gym");
    }

    #[tokio::test]
    async fn test_search_gyms() {
        let repo = InMemoryGymsRepository::new();
        let service = GymService::new(&repo);
        service
            .create(new_gym("JavaScript Gym", "0", "0"))
            .await
            .unwrap();
        service
            .create(new_gym("TypeScript Gym", "0", "0"))
            .await
            .unwrap();

        let gyms = service.search("JavaScript", 1).await.unwrap();

        assert_eq!(gyms.len(), 1);
        assert_eq!(gyms[0].title, "JavaScript Gym");
    }

    #[tokio::test]
    async fn test_search_gyms_paginated() {
        let repo = InMemoryGymsRepository::new();
        let service = GymService::new(&repo);
        for i in (1..=22).rev() {
            service
                .create(new_gym(&format!("JavaScript Gym {i:02}"), "0", "0"))
                .await
                .unwrap();
        }

        let gyms = service.search("JavaScript", 2).await.unwrap();

        assert_eq!(gyms.len(), 2);
        assert_eq!(gyms[0].title, "JavaScript Gym 21");
        assert_eq!(gyms[1].title, "JavaScript Gym 22");
        let first_page = service.search("JavaScript", 1).await.unwrap();
        assert_eq!(first_page[0].title, "JavaScript Gym 01");
    }
}
