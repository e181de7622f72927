//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{CategoryRepository, CityRepository, DatabasePool, EventRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub events: EventRepository,
    pub categories: CategoryRepository,
    pub cities: CityRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool.clone()),
            cities: CityRepository::new(pool),
        }
    }
}
