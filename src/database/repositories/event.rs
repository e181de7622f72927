//! Event repository implementation
//!
//! The `participants` column is a `uuid[]` mutated only through the guarded
//! set-insert/set-remove below, mirroring an atomic array-union/array-remove
//! store primitive.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use crate::utils::errors::SportsyError;

const EVENT_COLUMNS: &str = "id, title, description, date, time, location, category, max_participants, entry_fee, participants, created_by, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event with an empty roster
    pub async fn create(
        &self,
        request: CreateEventRequest,
        created_by: Uuid,
    ) -> Result<Event, SportsyError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (id, title, description, date, time, location, category, max_participants, entry_fee, participants, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, '{}', $10, $11, $11)
            RETURNING id, title, description, date, time, location, category, max_participants, entry_fee, participants, created_by, created_at, updated_at
            "#
        )
        .bind(Uuid::new_v4())
        .bind(request.title)
        .bind(request.description)
        .bind(request.date)
        .bind(request.time)
        .bind(request.location)
        .bind(request.category)
        .bind(request.max_participants)
        .bind(request.entry_fee)
        .bind(created_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, SportsyError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {} FROM events WHERE id = $1",
            EVENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Partial update; absent fields keep their stored values
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateEventRequest,
    ) -> Result<Event, SportsyError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                date = COALESCE($4, date),
                time = COALESCE($5, time),
                location = COALESCE($6, location),
                category = COALESCE($7, category),
                max_participants = COALESCE($8, max_participants),
                entry_fee = COALESCE($9, entry_fee),
                updated_at = $10
            WHERE id = $1
            RETURNING id, title, description, date, time, location, category, max_participants, entry_fee, participants, created_by, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(request.title)
        .bind(request.description)
        .bind(request.date)
        .bind(request.time)
        .bind(request.location)
        .bind(request.category)
        .bind(request.max_participants)
        .bind(request.entry_fee)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Delete event
    pub async fn delete(&self, id: Uuid) -> Result<(), SportsyError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Full-collection scan, no pagination
    pub async fn list(&self) -> Result<Vec<Event>, SportsyError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {} FROM events ORDER BY created_at ASC",
            EVENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Events created by a user
    pub async fn list_by_creator(&self, user_id: Uuid) -> Result<Vec<Event>, SportsyError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {} FROM events WHERE created_by = $1 ORDER BY created_at ASC",
            EVENT_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Events whose roster contains the user
    pub async fn list_joined(&self, user_id: Uuid) -> Result<Vec<Event>, SportsyError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {} FROM events WHERE $1 = ANY(participants) ORDER BY created_at ASC",
            EVENT_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Atomic set-insert of a participant. Appending an already-present id
    /// is a no-op, which guards against duplicate requests racing each other.
    /// Capacity is NOT checked here; the store only guarantees set semantics.
    pub async fn add_participant(&self, id: Uuid, user_id: Uuid) -> Result<(), SportsyError> {
        sqlx::query(
            r#"
            UPDATE events
            SET participants = array_append(participants, $2), updated_at = $3
            WHERE id = $1 AND NOT ($2 = ANY(participants))
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Atomic set-remove of a participant; removing an absent id is a no-op
    pub async fn remove_participant(&self, id: Uuid, user_id: Uuid) -> Result<(), SportsyError> {
        sqlx::query(
            r#"
            UPDATE events
            SET participants = array_remove(participants, $2), updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
