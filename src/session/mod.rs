//! Session management
//!
//! Explicit per-user session objects injected into call sites that need
//! identity or role.

pub mod context;

pub use context::Session;
