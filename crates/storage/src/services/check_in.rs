use chrono::{Duration, NaiveDateTime};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::geo::{Coordinate, distance_between};
use crate::models::{CheckIn, NewCheckIn};
use crate::repository::{CheckInsRepository, GymsRepository};

/// Users must be at most this far from the gym to check in.
pub const MAX_CHECK_IN_DISTANCE_KM: f64 = 0.1;

/// How long after its creation a check-in may still be validated.
pub const CHECK_IN_VALIDATION_WINDOW_MINUTES: i64 = 20;

#[derive(Debug, Clone)]
pub struct CheckInInput {
    pub gym_id: Uuid,
    pub user_id: Uuid,
    pub user_latitude: f64,
    pub user_longitude: f64,
}

pub struct CheckInService<'a> {
    check_ins: &'a dyn CheckInsRepository,
    gyms: &'a dyn GymsRepository,
}

impl<'a> CheckInService<'a> {
    pub fn new(check_ins: &'a dyn CheckInsRepository, gyms: &'a dyn GymsRepository) -> Self {
        Self { check_ins, gyms }
    }

    /// Check a user in at a gym.
    ///
    /// `now` decides both the "one per day" window and the stored
    /// `created_at`. Fails with [`ServiceError::MaxDistance`] when the user is
    /// more than [`MAX_CHECK_IN_DISTANCE_KM`] away, and with
    /// [`ServiceError::MaxNumberOfCheckIns`] when they already checked in on
    /// `now`'s date.
    pub async fn check_in(
        &self,
        input: CheckInInput,
        now: NaiveDateTime,
    ) -> ServiceResult<CheckIn> {
        let gym = self
            .gyms
            .find_by_id(input.gym_id)
            .await?
            .ok_or(ServiceError::ResourceNotFound)?;

        let user_location = Coordinate::new(input.user_latitude, input.user_longitude);
        let distance = distance_between(user_location, gym.coordinate());

        if distance.is_nan() || distance > MAX_CHECK_IN_DISTANCE_KM {
            tracing::debug!(
                gym_id = %gym.id,
                user_id = %input.user_id,
                distance_km = distance,
                "Check-in rejected, user too far from gym"
            );
            return Err(ServiceError::MaxDistance);
        }

        let same_day = self
            .check_ins
            .find_by_user_id_on_date(input.user_id, now.date())
            .await?;

        if same_day.is_some() {
            tracing::debug!(user_id = %input.user_id, "Check-in rejected, already checked in today");
            return Err(ServiceError::MaxNumberOfCheckIns);
        }

        let check_in = self
            .check_ins
            .create(NewCheckIn {
                gym_id: gym.id,
                user_id: input.user_id,
                created_at: now,
            })
            .await?;

        tracing::info!(
            check_in_id = %check_in.id,
            gym_id = %gym.id,
            user_id = %input.user_id,
            "User checked in"
        );

        Ok(check_in)
    }

    /// A page of the user's check-ins, oldest first
    pub async fn history(&self, user_id: Uuid, page: u32) -> ServiceResult<Vec<CheckIn>> {
        Ok(self.check_ins.find_many_by_user_id(user_id, page).await?)
    }

    /// Total number of check-ins for the user
    pub async fn metrics(&self, user_id: Uuid) -> ServiceResult<i64> {
        Ok(self.check_ins.count_by_user_id(user_id).await?)
    }

    /// Mark a check-in as validated, provided it is still recent enough.
    pub async fn validate(&self, check_in_id: Uuid, now: NaiveDateTime) -> ServiceResult<CheckIn> {
        let mut check_in = self
            .check_ins
            .find_by_id(check_in_id)
            .await?
            .ok_or(ServiceError::ResourceNotFound)?;

        if now - check_in.created_at > Duration::minutes(CHECK_IN_VALIDATION_WINDOW_MINUTES) {
            tracing::debug!(%check_in_id, "Check-in validation rejected, window elapsed");
            return Err(ServiceError::LateCheckInValidation);
        }

        check_in.validated_at = Some(now);
        let check_in = self.check_ins.save(&check_in).await?;

        tracing::info!(%check_in_id, "Check-in validated");

        Ok(check_in)
    }
}
