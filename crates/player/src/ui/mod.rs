use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;

use presentation::components::{LocationForm, LocationList, MapPanel};
use presentation::state::DirectoryState;

const PAGE_TITLE: &str = "Location Directory";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let platform = use_platform();
    let sync = presentation::services::use_sync_controller();

    // Must be created inside an active Dioxus runtime.
    let mut directory = use_context_provider(DirectoryState::new);

    use_hook(move || platform.set_page_title(PAGE_TITLE));

    use_future(move || {
        let sync = sync.clone();
        async move {
            sync.refresh_all().await;
            directory.mark_changed();
        }
    });

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        document::Stylesheet {
            href: asset!("assets/css/main.css"),
        }

        div {
            class: "placemap",
            aside {
                class: "placemap-sidebar",
                h1 { class: "placemap-title", "{PAGE_TITLE}" }
                LocationForm {}
                LocationList {}
            }
            main {
                class: "placemap-main",
                MapPanel {}
            }
        }
    }
}
