//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod catalog;
pub mod event;
pub mod membership;
pub mod pipeline;

// Re-export commonly used services
pub use auth::{AuthService, DashboardScope, DashboardTab};
pub use catalog::CatalogService;
pub use event::{EventService, JoinOutcome, LeaveOutcome};
pub use membership::MembershipStatus;
pub use pipeline::{EventQuery, SortKey};

use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub event_service: EventService,
    pub catalog_service: CatalogService,
    pub auth_service: AuthService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(database: &DatabaseService) -> Self {
        let event_service = EventService::new(database.events.clone());
        let catalog_service =
            CatalogService::new(database.categories.clone(), database.cities.clone());
        let auth_service = AuthService::new(database.users.clone());

        Self {
            event_service,
            catalog_service,
            auth_service,
        }
    }
}
