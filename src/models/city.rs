//! City model
//!
//! Admin-managed reference data; not joined to events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCityRequest {
    pub name: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCityRequest {
    pub name: Option<String>,
    pub state: Option<String>,
}

impl CreateCityRequest {
    /// No validation beyond a non-empty name
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("City name is required".to_string());
        }
        Ok(())
    }
}
