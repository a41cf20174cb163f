use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use super::{CheckInsRepository, PAGE_SIZE, page_offset};
use crate::error::{Result, StorageError};
use crate::models::{CheckIn, NewCheckIn};

pub struct PgCheckInsRepository {
    pool: PgPool,
}

impl PgCheckInsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckInsRepository for PgCheckInsRepository {
    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn> {
        let check_in = sqlx::query_as::<_, CheckIn>(
            r#"
            INSERT INTO check_ins (id, gym_id, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, gym_id, user_id, created_at, validated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(check_in.gym_id)
        .bind(check_in.user_id)
        .bind(check_in.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(check_in)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CheckIn>> {
        let check_in = sqlx::query_as::<_, CheckIn>(
            r#"
            SELECT id, gym_id, user_id, created_at, validated_at
            FROM check_ins
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(check_in)
    }

    async fn save(&self, check_in: &CheckIn) -> Result<CheckIn> {
        let saved = sqlx::query_as::<_, CheckIn>(
            r#"
            UPDATE check_ins
            SET validated_at = $2
            WHERE id = $1
            RETURNING id, gym_id, user_id, created_at, validated_at
            "#,
        )
        .bind(check_in.id)
        .bind(check_in.validated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(saved)
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>> {
        let start_of_day = date.and_time(NaiveTime::MIN);
        let end_of_day = start_of_day + Duration::days(1);

        let check_in = sqlx::query_as::<_, CheckIn>(
            r#"
            SELECT id, gym_id, user_id, created_at, validated_at
            FROM check_ins
            WHERE user_id = $1
              AND created_at >= $2
              AND created_at < $3
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(start_of_day)
        .bind(end_of_day)
        .fetch_optional(&self.pool)
        .await?;

        Ok(check_in)
    }

    async fn find_many_by_user_id(&self, user_id: Uuid, page: u32) -> Result<Vec<CheckIn>> {
        let check_ins = sqlx::query_as::<_, CheckIn>(
            r#"
            SELECT id, gym_id, user_id, created_at, validated_at
            FROM check_ins
            WHERE user_id = $1
            ORDER BY created_at
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(i64::from(PAGE_SIZE))
        .bind(page_offset(page))
        .fetch_all(&self.pool)
        .await?;

        Ok(check_ins)
    }

    async fn count_by_user_id(&self, user_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM check_ins WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
