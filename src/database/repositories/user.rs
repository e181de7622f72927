//! User repository implementation

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{CreateUserRequest, UpdateUserRequest, UserProfile};
use crate::utils::errors::SportsyError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new user profile
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserProfile, SportsyError> {
        let user = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO users (id, full_name, email, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, email, role, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.full_name)
        .bind(request.email)
        .bind(request.role)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, SportsyError> {
        let user = sqlx::query_as::<_, UserProfile>(
            "SELECT id, full_name, email, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, SportsyError> {
        let user = sqlx::query_as::<_, UserProfile>(
            "SELECT id, full_name, email, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update user profile (role is not updatable here)
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserProfile, SportsyError> {
        let user = sqlx::query_as::<_, UserProfile>(
            r#"
            UPDATE users
            SET full_name = COALESCE($2, full_name),
                email = COALESCE($3, email)
            WHERE id = $1
            RETURNING id, full_name, email, role, created_at
            "#,
        )
        .bind(id)
        .bind(request.full_name)
        .bind(request.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
