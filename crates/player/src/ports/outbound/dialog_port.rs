//! Dialog Port - Modal prompts shown to the user
//!
//! Mutation failures are reported with an alert and deletes are guarded by a
//! yes/no confirmation. Confirmation is asynchronous because the desktop
//! webview answers through a script round-trip.

use std::{future::Future, pin::Pin};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait DialogPort: Send + Sync {
    /// Ask a yes/no question; resolves to `true` when the user accepts
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>>;

    /// Show a message the user has to dismiss
    fn alert(&self, message: &str);
}
