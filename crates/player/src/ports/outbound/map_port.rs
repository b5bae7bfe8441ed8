//! Map Renderer Port - Operations on the tile map
//!
//! All calls are fire-and-forget. The renderer hands out a [`MarkerKey`] for
//! every marker it adds; the key is the only way to refer to that marker
//! afterwards.

use std::fmt;

use placemap_domain::LatLng;

/// Renderer-assigned marker identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerKey(pub u64);

impl fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker-{}", self.0)
    }
}

/// Content of a marker popup
///
/// Rendered as a bold title line followed by the body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPopup {
    pub title: String,
    pub body: String,
}

impl MarkerPopup {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Popup markup with both parts HTML-escaped
    pub fn to_html(&self) -> String {
        format!(
            "<b>{}</b><br>{}",
            escape_html(&self.title),
            escape_html(&self.body)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait MapRendererPort: Send + Sync {
    /// Place a marker at `position` (display order) with a bound popup
    fn add_marker(&self, position: LatLng, popup: &MarkerPopup) -> MarkerKey;

    fn remove_marker(&self, key: MarkerKey);

    /// Animate the view to `position` at the given zoom level
    fn fly_to(&self, position: LatLng, zoom: u8);

    fn open_popup(&self, key: MarkerKey);
}
