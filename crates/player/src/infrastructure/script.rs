//! Helpers for building JavaScript snippets run through `document::eval`

use serde::Serialize;

/// Encode `value` as a JavaScript literal
///
/// JSON is valid JavaScript, so strings come out quoted and escaped.
pub fn js_literal<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
