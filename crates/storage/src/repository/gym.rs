use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{GymsRepository, NEARBY_RADIUS_KM, PAGE_SIZE, page_offset};
use crate::error::Result;
use crate::geo::{Coordinate, EARTH_RADIUS_KM};
use crate::models::{Gym, NewGym};

/// Escape `LIKE` metacharacters so the pattern matches `query` literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct PgGymsRepository {
    pool: PgPool,
}

impl PgGymsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymsRepository for PgGymsRepository {
    async fn create(&self, gym: NewGym) -> Result<Gym> {
        let gym = sqlx::query_as::<_, Gym>(
            r#"
            INSERT INTO gyms (id, title, description, phone, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, phone, latitude, longitude
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&gym.title)
        .bind(&gym.description)
        .bind(&gym.phone)
        .bind(gym.latitude)
        .bind(gym.longitude)
        .fetch_one(&self.pool)
        .await?;

        Ok(gym)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Gym>> {
        let gym = sqlx::query_as::<_, Gym>(
            r#"
            SELECT id, title, description, phone, latitude, longitude
            FROM gyms
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(gym)
    }

    async fn find_many_nearby(&self, origin: Coordinate) -> Result<Vec<Gym>> {
        // Haversine, matching geo::distance_between
        let gyms = sqlx::query_as::<_, Gym>(
            r#"
            SELECT id, title, description, phone, latitude, longitude
            FROM gyms
            WHERE 2 * $3::float8 * asin(least(1.0, sqrt(
                power(sin(radians(latitude::float8 - $1::float8) / 2), 2)
                + cos(radians($1::float8)) * cos(radians(latitude::float8))
                  * power(sin(radians(longitude::float8 - $2::float8) / 2), 2)
            ))) <= $4::float8
            "#,
        )
        .bind(origin.latitude)
        .bind(origin.longitude)
        .bind(EARTH_RADIUS_KM)
        .bind(NEARBY_RADIUS_KM)
        .fetch_all(&self.pool)
        .await?;

        Ok(gyms)
    }

    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>> {
        let gyms = sqlx::query_as::<_, Gym>(
            r#"
            SELECT id, title, description, phone, latitude, longitude
            FROM gyms
            WHERE title ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY title COLLATE "C", id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(escape_like(query))
        .bind(i64::from(PAGE_SIZE))
        .bind(page_offset(page))
        .fetch_all(&self.pool)
        .await?;

        Ok(gyms)
    }
}
