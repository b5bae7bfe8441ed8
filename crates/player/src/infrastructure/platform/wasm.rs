//! WASM platform implementations
//!
//! Dialogs are the browser's blocking `window.confirm` / `window.alert`.

use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{DialogProvider, DocumentProvider};
use crate::state::Platform;

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// WASM dialogs using the browser window
#[derive(Clone, Default)]
pub struct WasmDialogProvider;

impl DialogProvider for WasmDialogProvider {
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        let answer = web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false);
        Box::pin(std::future::ready(answer))
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                tracing::warn!("Failed to show alert: {:?}", e);
            }
        }
    }
}

/// Create platform services for WASM
pub fn create_platform() -> Platform {
    Platform::new(WasmDocumentProvider, WasmDialogProvider)
}
