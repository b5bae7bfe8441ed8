//! Reactive handles over the directory
//!
//! The list and markers live in the `SyncController`; the UI only needs to
//! know when they changed. The form is owned here as a signal and handed to
//! the controller by value for the duration of a flow.

use dioxus::prelude::*;

use crate::state::FormController;

#[derive(Clone, Copy)]
pub struct DirectoryState {
    /// Bumped after every flow that may have re-rendered the directory
    pub revision: Signal<u64>,
    pub form: Signal<FormController>,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self {
            revision: Signal::new(0),
            form: Signal::new(FormController::new()),
        }
    }

    pub fn mark_changed(&mut self) {
        *self.revision.write() += 1;
    }

    /// Subscribe the calling component to directory changes
    pub fn track(&self) -> u64 {
        *self.revision.read()
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the DirectoryState from context
pub fn use_directory_state() -> DirectoryState {
    use_context::<DirectoryState>()
}
