//! Platform DI Container
//!
//! `Platform` aggregates the platform-specific providers behind the port
//! traits.
//!
//! Usage:
//! - Created by `create_platform()` in platform/desktop.rs or platform/wasm.rs
//! - Injected into Dioxus context by the binary
//! - Accessed in UI via `use_platform()`
//! - Handed to `SyncController` as its `DialogPort`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{DialogPort, DialogProvider, DocumentProvider, PlatformPort};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    document: Arc<dyn DocumentProviderDyn>,
    dialogs: Arc<dyn DialogProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

trait DialogProviderDyn: Send + Sync {
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>>;
    fn alert(&self, message: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl<T: DialogProvider + Send + Sync> DialogProviderDyn for T {
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        DialogProvider::confirm(self, message)
    }
    fn alert(&self, message: &str) {
        DialogProvider::alert(self, message)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<D, G>(document: D, dialogs: G) -> Self
    where
        D: DocumentProvider + Send + Sync,
        G: DialogProvider + Send + Sync,
    {
        Self {
            document: Arc::new(document),
            dialogs: Arc::new(dialogs),
        }
    }
}

impl DialogPort for Platform {
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        self.dialogs.confirm(message)
    }

    fn alert(&self, message: &str) {
        self.dialogs.alert(message)
    }
}

impl PlatformPort for Platform {
    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}
