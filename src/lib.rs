//! Sportsy
//!
//! A sports-event directory service. This library provides modular components
//! for event management (create, browse, join, leave), roster and membership
//! rules, and admin-managed reference data (categories, cities), backed by a
//! Postgres document store with atomic participant-set mutations.

pub mod api;
pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, SportsyError};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::ServiceFactory;
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
