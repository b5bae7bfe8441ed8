//! Presentation layer - Dioxus UI components

pub mod components;
pub mod services;
pub mod state;

pub use services::Services;
