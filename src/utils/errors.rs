//! Error handling for Sportsy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;
use uuid::Uuid;

/// Main error type for the Sportsy application
#[derive(Error, Debug)]
pub enum SportsyError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: Uuid },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: Uuid },

    #[error("Category not found: {category_id}")]
    CategoryNotFound { category_id: Uuid },

    #[error("City not found: {city_id}")]
    CityNotFound { city_id: Uuid },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for Sportsy operations
pub type Result<T> = std::result::Result<T, SportsyError>;

impl SportsyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SportsyError::Database(_) => false,
            SportsyError::Migration(_) => false,
            SportsyError::Config(_) => false,
            SportsyError::PermissionDenied(_) => false,
            SportsyError::UserNotFound { .. } => false,
            SportsyError::EventNotFound { .. } => false,
            SportsyError::CategoryNotFound { .. } => false,
            SportsyError::CityNotFound { .. } => false,
            SportsyError::InvalidInput(_) => false,
            SportsyError::ServiceUnavailable(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SportsyError::Database(_) => ErrorSeverity::Critical,
            SportsyError::Migration(_) => ErrorSeverity::Critical,
            SportsyError::Config(_) => ErrorSeverity::Critical,
            SportsyError::PermissionDenied(_) => ErrorSeverity::Warning,
            SportsyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
