//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`.

use std::{future::Future, pin::Pin};

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Modal prompts (window.confirm / window.alert)
pub trait DialogProvider: Clone + 'static {
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>>;

    fn alert(&self, message: &str);
}
