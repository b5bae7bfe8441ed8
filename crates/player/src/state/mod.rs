//! Client-side state
//!
//! - `view_state`: what is currently rendered (list rows + marker handles)
//! - `form_state`: the create/edit form
//! - `platform`: DI container for platform services

mod form_state;
mod platform;
mod view_state;

pub use form_state::{
    FormController, FormError, FormField, FormMode, SUBMIT_LABEL_CREATE, SUBMIT_LABEL_UPDATE,
};
pub use platform::Platform;
pub use view_state::{Directory, MarkerHandle, ViewStateStore};
