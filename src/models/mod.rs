//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod category;
pub mod city;
pub mod event;
pub mod user;

// Re-export commonly used models
pub use category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
pub use city::{City, CreateCityRequest, UpdateCityRequest};
pub use event::{CreateEventRequest, Event, UpdateEventRequest};
pub use user::{CreateUserRequest, Role, UpdateUserRequest, UserProfile};
