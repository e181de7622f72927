//! Repository implementations for data access

pub mod category;
pub mod city;
pub mod event;
pub mod user;

pub use category::CategoryRepository;
pub use city::CityRepository;
pub use event::EventRepository;
pub use user::UserRepository;
