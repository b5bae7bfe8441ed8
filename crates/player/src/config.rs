//! Application configuration
//!
//! Desktop builds read environment variables (after `.env` is loaded by the
//! binary). Web builds only honour `PLACEMAP_API_URL`, fixed at compile time.

use anyhow::{bail, Context, Result};
use placemap_domain::LatLng;
use url::Url;

const API_URL_VAR: &str = "PLACEMAP_API_URL";
const MAP_CENTER_VAR: &str = "PLACEMAP_MAP_CENTER";
const MAP_ZOOM_VAR: &str = "PLACEMAP_MAP_ZOOM";
const FOCUS_ZOOM_VAR: &str = "PLACEMAP_FOCUS_ZOOM";
const TILE_URL_VAR: &str = "PLACEMAP_TILE_URL";

pub const DEFAULT_API_BASE: &str = "https://asia-southeast2-personalsmz.cloudfunctions.net";
pub const DEFAULT_COLLECTION_PATH: &str = "/ProjectSmZ/lokasi";
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: -6.2,
    lng: 106.816666,
};
pub const DEFAULT_ZOOM: u8 = 12;
/// Zoom level used when flying to a selected marker
pub const DEFAULT_FOCUS_ZOOM: u8 = 15;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Leaflet renders attribution as HTML
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceMapConfig {
    /// Scheme and host of the location API, without a trailing slash
    pub api_base: String,
    /// Path of the location collection, relative to `api_base`
    pub collection_path: String,
    pub map: MapDefaults,
}

/// Initial map view and tile layer
#[derive(Debug, Clone, PartialEq)]
pub struct MapDefaults {
    pub center: LatLng,
    pub zoom: u8,
    /// Zoom used when flying to a selected location
    pub focus_zoom: u8,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            focus_zoom: DEFAULT_FOCUS_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
        }
    }
}

impl Default for PlaceMapConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
            map: MapDefaults::default(),
        }
    }
}

impl PlaceMapConfig {
    /// Load configuration for the current target
    pub fn from_env() -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(|key| match key {
                API_URL_VAR => option_env!("PLACEMAP_API_URL").map(str::to_string),
                _ => None,
            })
        }
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(api_url) = lookup(API_URL_VAR) {
            let (base, path) = split_api_url(&api_url)
                .with_context(|| format!("{API_URL_VAR} is not a usable URL: {api_url}"))?;
            config.api_base = base;
            config.collection_path = path;
        }

        if let Some(center) = lookup(MAP_CENTER_VAR) {
            config.map.center = parse_center(&center)
                .with_context(|| format!("{MAP_CENTER_VAR} must be \"lat,lng\", got {center:?}"))?;
        }

        if let Some(zoom) = lookup(MAP_ZOOM_VAR) {
            config.map.zoom = zoom
                .trim()
                .parse()
                .with_context(|| format!("{MAP_ZOOM_VAR} must be a zoom level, got {zoom:?}"))?;
        }

        if let Some(zoom) = lookup(FOCUS_ZOOM_VAR) {
            config.map.focus_zoom = zoom
                .trim()
                .parse()
                .with_context(|| format!("{FOCUS_ZOOM_VAR} must be a zoom level, got {zoom:?}"))?;
        }

        if let Some(tile_url) = lookup(TILE_URL_VAR) {
            config.map.tile_url = tile_url;
        }

        Ok(config)
    }

    /// Full URL of the location collection
    pub fn api_url(&self) -> String {
        format!("{}{}", self.api_base, self.collection_path)
    }
}

fn split_api_url(raw: &str) -> Result<(String, String)> {
    let url = Url::parse(raw.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("unsupported scheme {:?}", url.scheme());
    }
    let base = url.origin().ascii_serialization();
    let path = url.path().trim_end_matches('/').to_string();
    Ok((base, path))
}

fn parse_center(raw: &str) -> Result<LatLng> {
    let (lat, lng) = raw.split_once(',').context("missing comma")?;
    let lat: f64 = lat.trim().parse()?;
    let lng: f64 = lng.trim().parse()?;
    if !lat.is_finite() || !lng.is_finite() {
        bail!("coordinates must be finite");
    }
    Ok(LatLng::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<PlaceMapConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlaceMapConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_the_hosted_collection() {
        let config = load(&[]).unwrap();
        assert_eq!(
            config.api_url(),
            "https://asia-southeast2-personalsmz.cloudfunctions.net/ProjectSmZ/lokasi"
        );
        assert_eq!(config.map.center, LatLng::new(-6.2, 106.816666));
        assert_eq!(config.map.zoom, 12);
        assert_eq!(config.map.focus_zoom, 15);
        assert!(config
            .map
            .tile_attribution
            .contains(r#"<a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a>"#));
    }

    #[test]
    fn api_url_is_split_into_origin_and_collection() {
        let config = load(&[("PLACEMAP_API_URL", "http://localhost:8080/api/lokasi/")]).unwrap();
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.collection_path, "/api/lokasi");
    }

    #[test]
    fn map_overrides_are_applied() {
        let config = load(&[
            ("PLACEMAP_MAP_CENTER", " -7.25, 112.75 "),
            ("PLACEMAP_MAP_ZOOM", "10"),
            ("PLACEMAP_FOCUS_ZOOM", "17"),
            ("PLACEMAP_TILE_URL", "https://tiles.example/{z}/{x}/{y}.png"),
        ])
        .unwrap();
        assert_eq!(config.map.center, LatLng::new(-7.25, 112.75));
        assert_eq!(config.map.zoom, 10);
        assert_eq!(config.map.focus_zoom, 17);
        assert_eq!(config.map.tile_url, "https://tiles.example/{z}/{x}/{y}.png");
    }

    #[test]
    fn invalid_values_are_reported_with_the_variable_name() {
        let err = load(&[("PLACEMAP_MAP_CENTER", "jakarta")]).unwrap_err();
        assert!(err.to_string().contains("PLACEMAP_MAP_CENTER"));

        let err = load(&[("PLACEMAP_API_URL", "ftp://example.com/x")]).unwrap_err();
        assert!(err.to_string().contains("PLACEMAP_API_URL"));

        assert!(load(&[("PLACEMAP_MAP_ZOOM", "300")]).is_err());
    }
}
