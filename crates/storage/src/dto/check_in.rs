use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{validate_latitude, validate_longitude};
use crate::models::CheckIn;

/// Request payload for checking in at a gym
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCheckInRequest {
    pub gym_id: Uuid,

    /// Current latitude of the user
    #[validate(custom(function = "validate_latitude"))]
    pub latitude: f64,

    /// Current longitude of the user
    #[validate(custom(function = "validate_longitude"))]
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInResponse {
    pub id: Uuid,
    pub gym_id: Uuid,
    pub user_id: Uuid,
    pub created_at: NaiveDateTime,
    pub validated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInHistoryResponse {
    pub check_ins: Vec<CheckInResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserMetricsResponse {
    pub check_ins_count: i64,
}

impl From<CheckIn> for CheckInResponse {
    fn from(check_in: CheckIn) -> Self {
        Self {
            id: check_in.id,
            gym_id: check_in.gym_id,
            user_id: check_in.user_id,
            created_at: check_in.created_at,
            validated_at: check_in.validated_at,
        }
    }
}

impl From<Vec<CheckIn>> for CheckInHistoryResponse {
    fn from(check_ins: Vec<CheckIn>) -> Self {
        Self {
            check_ins: check_ins.into_iter().map(CheckInResponse::from).collect(),
        }
    }
}
