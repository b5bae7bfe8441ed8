//! Application layer - Use cases and orchestration

pub mod api;
pub mod dto;
pub mod error;
pub mod services;
pub mod sync_controller;

// Re-export common types
pub use error::ServiceError;
pub use sync_controller::{DeleteOutcome, SyncController};
