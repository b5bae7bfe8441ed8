//! Location Form - create and edit a single location
//!
//! The submit button reads "Add Location" or "Update Location" depending on
//! the form mode; cancel is only offered while editing.

use dioxus::prelude::*;

use crate::state::FormField;
use crate::ui::presentation::services::use_sync_controller;
use crate::ui::presentation::state::use_directory_state;

#[component]
pub fn LocationForm() -> Element {
    let sync = use_sync_controller();
    let directory = use_directory_state();
    let mut form = directory.form;

    let (submit_label, cancel_visible, editing_id, description) = {
        let current = form.read();
        (
            current.submit_label(),
            current.cancel_visible(),
            current.editing_id().map(|id| id.to_string()).unwrap_or_default(),
            current.field(FormField::Description).to_string(),
        )
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let sync = sync.clone();
        let mut directory = directory;
        spawn(async move {
            // Work on a copy so a failed save leaves the fields as typed.
            let mut working = directory.form.peek().clone();
            let mut form = directory.form;
            let _ = sync
                .submit_then(&mut working, move |reset| form.set(reset.clone()))
                .await;
            directory.mark_changed();
        });
    };

    rsx! {
        form {
            class: "location-form",
            onsubmit: handle_submit,

            input { r#type: "hidden", id: "location-id", value: "{editing_id}" }

            FieldInput { field: FormField::Name, input_type: "text" }
            FieldInput { field: FormField::Category, input_type: "text" }

            div {
                class: "form-group",
                label { r#for: "description", "{FormField::Description.label()}" }
                textarea {
                    id: "description",
                    rows: "3",
                    value: "{description}",
                    oninput: move |e| form.write().set_field(FormField::Description, e.value()),
                }
            }

            div {
                class: "form-row",
                FieldInput { field: FormField::Longitude, input_type: "number" }
                FieldInput { field: FormField::Latitude, input_type: "number" }
            }
            p { class: "form-hint", "Click the map to fill in the coordinates." }

            div {
                class: "form-actions",
                button { r#type: "submit", class: "btn-primary", "{submit_label}" }
                if cancel_visible {
                    button {
                        r#type: "button",
                        class: "btn-secondary",
                        onclick: move |_| form.write().reset(),
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// Single required input bound to one form field
#[component]
fn FieldInput(field: FormField, input_type: &'static str) -> Element {
    let mut form = use_directory_state().form;
    let value = form.read().field(field).to_string();
    let id = field.label().to_ascii_lowercase();
    // Coordinates accept any precision
    let step = (input_type == "number").then_some("any");

    rsx! {
        div {
            class: "form-group",
            label { r#for: "{id}", "{field.label()}" }
            input {
                id: "{id}",
                r#type: input_type,
                step,
                required: true,
                value: "{value}",
                oninput: move |e| form.write().set_field(field, e.value()),
            }
        }
    }
}
