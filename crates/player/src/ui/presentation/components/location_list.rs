//! Location List - one row per location in the directory

use dioxus::prelude::*;

use crate::application::dto::{ListAction, ListEntry};
use crate::ui::presentation::services::use_sync_controller;
use crate::ui::presentation::state::use_directory_state;

#[component]
pub fn LocationList() -> Element {
    let sync = use_sync_controller();
    let directory = use_directory_state();
    directory.track();
    let entries = sync.list_entries();

    let on_action = use_callback(move |action: ListAction| {
        let sync = sync.clone();
        let mut directory = directory;
        spawn(async move {
            let mut working = directory.form.peek().clone();
            let before = working.clone();
            let mut form = directory.form;
            sync.dispatch_then(action, &mut working, move |reset| form.set(reset.clone()))
                .await;
            // Edits land here, once the fetched location is in the form
            if working != before && *form.peek() != working {
                form.set(working);
            }
            directory.mark_changed();
        });
    });

    rsx! {
        ul {
            class: "location-list",
            if entries.is_empty() {
                li { class: "location-empty", "No locations yet." }
            }
            for entry in entries {
                LocationRow { key: "{entry.id}", entry: entry.clone(), on_action }
            }
        }
    }
}

#[component]
fn LocationRow(entry: ListEntry, on_action: Callback<ListAction>) -> Element {
    let select_id = entry.id.clone();
    let edit_id = entry.id.clone();
    let delete_id = entry.id.clone();

    rsx! {
        li {
            class: "location-item",
            onclick: move |_| on_action.call(ListAction::Select(select_id.clone())),

            div {
                class: "location-info",
                strong { "{entry.name}" }
                span { class: "location-category", "{entry.category}" }
            }

            div {
                class: "location-actions",
                button {
                    class: "edit-btn",
                    title: "Edit",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        on_action.call(ListAction::Edit(edit_id.clone()));
                    },
                    "✏️"
                }
                button {
                    class: "delete-btn",
                    title: "Delete",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        on_action.call(ListAction::Delete(delete_id.clone()));
                    },
                    "🗑️"
                }
            }
        }
    }
}
