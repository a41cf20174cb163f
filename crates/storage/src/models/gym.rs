use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::geo::Coordinate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Gym {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Gym {
    /// Position as floating-point degrees. A column that cannot be
    /// represented becomes NaN, which is never within any distance.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(
            self.latitude.to_f64().unwrap_or(f64::NAN),
            self.longitude.to_f64().unwrap_or(f64::NAN),
        )
    }
}

/// Fields supplied when registering a gym; the id is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewGym {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}
