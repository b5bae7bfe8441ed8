//! Leaflet renderer driven through `document::eval`
//!
//! Every port call becomes a small script pushed onto a page-side queue;
//! the bridge in `leaflet_bridge.js` drains it once the map exists. This
//! lets the directory render before the map element is mounted.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::document::{self, Eval};
use placemap_domain::LatLng;
use serde::{Deserialize, Serialize};

use crate::config::MapDefaults;
use crate::infrastructure::script::js_literal;
use crate::ports::outbound::{MapRendererPort, MarkerKey, MarkerPopup};

const BRIDGE_JS: &str = include_str!("leaflet_bridge.js");

/// Interval between checks for the Leaflet global and the map element
const MOUNT_POLL_MS: u32 = 50;

pub struct LeafletMap {
    element_id: String,
    defaults: MapDefaults,
    next_key: AtomicU64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitOptions<'a> {
    center: [f64; 2],
    zoom: u8,
    tile_url: &'a str,
    attribution: &'a str,
}

#[derive(Deserialize)]
struct ClickPayload {
    lat: f64,
    lng: f64,
}

impl LeafletMap {
    pub fn new(element_id: impl Into<String>, defaults: MapDefaults) -> Self {
        Self {
            element_id: element_id.into(),
            defaults,
            next_key: AtomicU64::new(1),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Create the map inside its element and start streaming clicks
    ///
    /// Read clicks from the returned handle with [`next_click`]. Dropping
    /// the handle stops click delivery; queued commands keep working.
    pub fn mount(&self) -> Eval {
        document::eval(&self.mount_script())
    }

    fn mount_script(&self) -> String {
        let options = InitOptions {
            center: [self.defaults.center.lat, self.defaults.center.lng],
            zoom: self.defaults.zoom,
            tile_url: &self.defaults.tile_url,
            attribution: &self.defaults.tile_attribution,
        };
        let id = js_literal(&self.element_id);
        format!(
            "{BRIDGE_JS}\n\
             while (!window.L || !document.getElementById({id})) {{\n\
             await new Promise((r) => setTimeout(r, {MOUNT_POLL_MS}));\n\
             }}\n\
             const map = window.placemap.init({id}, {options});\n\
             map.off(\"click\");\n\
             map.on(\"click\", (e) => dioxus.send({{ lat: e.latlng.lat, lng: e.latlng.lng }}));\n\
             await new Promise(() => {{}});",
            options = js_literal(&options),
        )
    }

    fn run(&self, command: String) {
        // The handle is not needed; the script runs regardless.
        let _ = document::eval(&command);
    }
}

/// Wait for the next map click, in display order
///
/// Returns `None` once the channel is closed.
pub async fn next_click(mount: &mut Eval) -> Option<LatLng> {
    loop {
        let message = match mount.recv::<serde_json::Value>().await {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!("Map click stream ended: {:?}", e);
                return None;
            }
        };
        match parse_click(message) {
            Some(point) => return Some(point),
            None => tracing::warn!("Ignoring malformed map click"),
        }
    }
}

fn parse_click(message: serde_json::Value) -> Option<LatLng> {
    let click: ClickPayload = serde_json::from_value(message).ok()?;
    (click.lat.is_finite() && click.lng.is_finite()).then(|| LatLng::new(click.lat, click.lng))
}

fn enqueue(body: &str) -> String {
    format!(
        "(window.__placemapQueue = window.__placemapQueue || []).push(function (pm) {{ {body} }});\n\
         if (window.placemap) window.placemap.flush();"
    )
}

fn add_marker_command(key: MarkerKey, position: LatLng, popup: &MarkerPopup) -> String {
    enqueue(&format!(
        "pm.addMarker({}, {}, {}, {});",
        js_literal(&key.to_string()),
        js_literal(&position.lat),
        js_literal(&position.lng),
        js_literal(&popup.to_html()),
    ))
}

fn remove_marker_command(key: MarkerKey) -> String {
    enqueue(&format!("pm.removeMarker({});", js_literal(&key.to_string())))
}

fn fly_to_command(position: LatLng, zoom: u8) -> String {
    enqueue(&format!(
        "pm.flyTo({}, {}, {zoom});",
        js_literal(&position.lat),
        js_literal(&position.lng),
    ))
}

fn open_popup_command(key: MarkerKey) -> String {
    enqueue(&format!("pm.openPopup({});", js_literal(&key.to_string())))
}

impl MapRendererPort for LeafletMap {
    fn add_marker(&self, position: LatLng, popup: &MarkerPopup) -> MarkerKey {
        let key = MarkerKey(self.next_key.fetch_add(1, Ordering::Relaxed));
        self.run(add_marker_command(key, position, popup));
        key
    }

    fn remove_marker(&self, key: MarkerKey) {
        self.run(remove_marker_command(key));
    }

    fn fly_to(&self, position: LatLng, zoom: u8) {
        self.run(fly_to_command(position, zoom));
    }

    fn open_popup(&self, key: MarkerKey) {
        self.run(open_popup_command(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaceMapConfig;

    #[test]
    fn marker_command_uses_display_order_and_escaped_popup() {
        let script = add_marker_command(
            MarkerKey(3),
            LatLng::new(-6.2, 106.8),
            &MarkerPopup::new("Cafe \"X\"", "desc"),
        );
        assert!(script.contains(
            r#"pm.addMarker("marker-3", -6.2, 106.8, "<b>Cafe &quot;X&quot;</b><br>desc");"#
        ));
        assert!(script.ends_with("if (window.placemap) window.placemap.flush();"));
    }

    #[test]
    fn fly_to_command_carries_zoom() {
        let script = fly_to_command(LatLng::new(-6.2, 106.8), 15);
        assert!(script.contains("pm.flyTo(-6.2, 106.8, 15);"));
    }

    #[test]
    fn remove_and_open_address_marker_by_key() {
        assert!(remove_marker_command(MarkerKey(7)).contains(r#"pm.removeMarker("marker-7");"#));
        assert!(open_popup_command(MarkerKey(7)).contains(r#"pm.openPopup("marker-7");"#));
    }

    #[test]
    fn mount_script_initializes_with_defaults() {
        let map = LeafletMap::new("map", PlaceMapConfig::default().map);
        let script = map.mount_script();
        assert!(script.starts_with(BRIDGE_JS));
        assert!(script.contains(r#"window.placemap.init("map", {"center":[-6.2,106.816666],"zoom":12,"#));
        assert!(script.contains(r#""tileUrl":"https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png""#));
        assert!(script.contains("dioxus.send("));
    }

    #[test]
    fn bridge_keeps_markers_when_the_map_is_recreated() {
        let reinit = &BRIDGE_JS[BRIDGE_JS.find("init: function").unwrap_or(0)..];
        assert!(!reinit.contains("markers = {}"));
        assert!(reinit.contains("markers[key].addTo(map);"));
    }

    #[test]
    fn click_payload_is_read_in_display_order() {
        let point = parse_click(serde_json::json!({ "lat": -6.2, "lng": 106.816666 }));
        assert_eq!(point, Some(LatLng::new(-6.2, 106.816666)));
    }

    #[test]
    fn malformed_click_payload_is_dropped() {
        assert_eq!(parse_click(serde_json::json!({ "lat": "north" })), None);
    }
}
