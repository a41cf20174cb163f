use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CheckIn {
    pub id: Uuid,
    pub gym_id: Uuid,
    pub user_id: Uuid,
    pub created_at: NaiveDateTime,
    pub validated_at: Option<NaiveDateTime>,
}

impl CheckIn {
    pub fn is_validated(&self) -> bool {
        self.validated_at.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct NewCheckIn {
    pub gym_id: Uuid,
    pub user_id: Uuid,
    pub created_at: NaiveDateTime,
}
