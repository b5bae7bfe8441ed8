//! UI state shared through Dioxus context

mod directory_state;

pub use directory_state::{use_directory_state, DirectoryState};
