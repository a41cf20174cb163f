use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::{validate_latitude, validate_longitude};
use crate::models::{Gym, NewGym};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GymResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GymListResponse {
    pub gyms: Vec<GymResponse>,
}

/// Request payload for registering a gym
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGymRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(custom(function = "validate_decimal_latitude"))]
    pub latitude: Decimal,

    #[validate(custom(function = "validate_decimal_longitude"))]
    pub longitude: Decimal,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyGymsQuery {
    #[validate(custom(function = "validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "validate_longitude"))]
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchGymsQuery {
    /// Case-insensitive fragment of the gym title
    #[validate(length(min = 1, max = 255))]
    pub q: String,

    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

fn validate_decimal_latitude(latitude: &Decimal) -> Result<(), validator::ValidationError> {
    validate_latitude(latitude.to_f64().unwrap_or(f64::NAN))
}

fn validate_decimal_longitude(longitude: &Decimal) -> Result<(), validator::ValidationError> {
    validate_longitude(longitude.to_f64().unwrap_or(f64::NAN))
}

impl From<CreateGymRequest> for NewGym {
    fn from(request: CreateGymRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            phone: request.phone,
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }
}

impl From<Gym> for GymResponse {
    fn from(gym: Gym) -> Self {
        Self {
            id: gym.id,
            title: gym.title,
            description: gym.description,
            phone: gym.phone,
            latitude: gym.latitude,
            longitude: gym.longitude,
        }
    }
}

impl From<Vec<Gym>> for GymListResponse {
    fn from(gyms: Vec<Gym>) -> Self {
        Self {
            gyms: gyms.into_iter().map(GymResponse::from).collect(),
        }
    }
}
