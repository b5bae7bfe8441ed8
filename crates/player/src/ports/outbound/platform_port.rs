//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for the platform-specific
//! operations needed by the UI layer. The concrete implementation
//! (`Platform`) lives in `state/platform.rs`.

use super::DialogPort;

/// Unified platform services port
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: DialogPort {
    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}
