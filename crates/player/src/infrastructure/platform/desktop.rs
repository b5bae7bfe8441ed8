//! Desktop platform implementations
//!
//! The desktop build renders inside a webview, so modal dialogs are the
//! webview's own `window.confirm` / `window.alert`, reached through a script
//! round-trip.

use std::{future::Future, pin::Pin};

use dioxus::document;

use crate::infrastructure::script::js_literal;
use crate::ports::outbound::platform::{DialogProvider, DocumentProvider};
use crate::state::Platform;

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is managed by Dioxus desktop
    }
}

/// Desktop dialogs evaluated in the webview
#[derive(Clone, Default)]
pub struct DesktopDialogProvider;

impl DialogProvider for DesktopDialogProvider {
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        let script = format!("return window.confirm({});", js_literal(message));
        Box::pin(async move {
            match document::eval(&script).join::<bool>().await {
                Ok(answer) => answer,
                Err(e) => {
                    tracing::warn!("Confirm dialog failed, treating as declined: {:?}", e);
                    false
                }
            }
        })
    }

    fn alert(&self, message: &str) {
        let _ = document::eval(&format!("window.alert({});", js_literal(message)));
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(DesktopDocumentProvider, DesktopDialogProvider)
}
