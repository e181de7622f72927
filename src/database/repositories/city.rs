//! City repository implementation

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::city::{City, CreateCityRequest, UpdateCityRequest};
use crate::utils::errors::SportsyError;

#[derive(Debug, Clone)]
pub struct CityRepository {
    pool: PgPool,
}

impl CityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new city
    pub async fn create(&self, request: CreateCityRequest) -> Result<City, SportsyError> {
        let city = sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (id, name, state, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, state, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.name)
        .bind(request.state)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(city)
    }

    /// Find city by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<City>, SportsyError> {
        let city = sqlx::query_as::<_, City>(
            "SELECT id, name, state, created_at FROM cities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(city)
    }

    /// Update city
    pub async fn update(&self, id: Uuid, request: UpdateCityRequest) -> Result<City, SportsyError> {
        let city = sqlx::query_as::<_, City>(
            r#"
            UPDATE cities
            SET name = COALESCE($2, name),
                state = COALESCE($3, state)
            WHERE id = $1
            RETURNING id, name, state, created_at
            "#,
        )
        .bind(id)
        .bind(request.name)
        .bind(request.state)
        .fetch_one(&self.pool)
        .await?;

        Ok(city)
    }

    /// Delete city
    pub async fn delete(&self, id: Uuid) -> Result<(), SportsyError> {
        sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List all cities
    pub async fn list(&self) -> Result<Vec<City>, SportsyError> {
        let cities = sqlx::query_as::<_, City>(
            "SELECT id, name, state, created_at FROM cities ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cities)
    }
}
