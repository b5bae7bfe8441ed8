//! Map Panel - hosts the Leaflet map and feeds clicks into the form

use dioxus::prelude::*;

use crate::infrastructure::map::next_click;
use crate::ui::presentation::services::use_map;
use crate::ui::presentation::state::use_directory_state;

#[component]
pub fn MapPanel() -> Element {
    let map = use_map();
    let directory = use_directory_state();
    let element_id = map.element_id().to_string();

    use_future(move || {
        let map = map.clone();
        let mut form = directory.form;
        async move {
            let mut mount = map.mount();
            while let Some(point) = next_click(&mut mount).await {
                form.write().capture_click_as_coordinates(point);
            }
        }
    });

    rsx! {
        div { id: "{element_id}", class: "placemap-map" }
    }
}
