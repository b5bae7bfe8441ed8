//! Data transfer objects
//!
//! DTOs are used to transfer data between layers. The presentation layer
//! raises [`ListAction`]s and renders [`ListEntry`]s without touching the
//! domain entity directly.

pub mod list_action;
pub mod list_entry;

pub use list_action::ListAction;
pub use list_entry::ListEntry;
