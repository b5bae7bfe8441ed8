//! Test doubles for the outbound ports
//!
//! These fakes record what the application asked of them so tests can
//! assert on outbound calls instead of on implementation details.

pub mod fixtures;
mod in_memory_api;
mod recording_map;
mod scripted_dialogs;

pub use in_memory_api::{InMemoryLocationApi, RecordedRequest, RequestMethod};
pub use recording_map::RecordingMap;
pub use scripted_dialogs::ScriptedDialogs;
