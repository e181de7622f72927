//! Event model
//!
//! An event is a single organized sports gathering. The `participants` field
//! carries set semantics: a user identifier appears at most once, and it is
//! mutated only through the join/leave store primitives.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    /// Weak reference to a category by name; no referential integrity enforced.
    pub category: String,
    pub max_participants: i32,
    /// Free-text fee as entered at creation; parsed only for sorting.
    pub entry_fee: Option<String>,
    pub participants: Vec<Uuid>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Current roster size
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Capacity reached: no further joins are admitted
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants.max(0) as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub category: String,
    pub max_participants: i32,
    pub entry_fee: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub max_participants: Option<i32>,
    pub entry_fee: Option<String>,
}

impl CreateEventRequest {
    /// Validate required fields before the record reaches the store.
    /// Missing title/date/capacity are rejected here rather than persisted
    /// as half-formed documents.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title is required".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Event location is required".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Event category is required".to_string());
        }
        if self.max_participants <= 0 {
            return Err("Max participants must be a positive number".to_string());
        }
        Ok(())
    }
}

impl UpdateEventRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref title) = self.title {
            if title.trim().is_empty() {
                return Err("Event title cannot be empty".to_string());
            }
        }
        if let Some(max) = self.max_participants {
            if max <= 0 {
                return Err("Max participants must be a positive number".to_string());
            }
        }
        Ok(())
    }
}
