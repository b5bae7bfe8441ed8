//! Simple test fixtures used across unit tests.

use placemap_domain::{GeoPoint, Location, LocationDraft, LocationId};

/// A location in the "food" category with description "desc"
pub fn location(id: &str, name: &str, longitude: f64, latitude: f64) -> Location {
    Location {
        id: LocationId::new(id),
        name: name.to_string(),
        category: "food".to_string(),
        description: "desc".to_string(),
        position: GeoPoint::new(longitude, latitude),
    }
}

pub fn draft(name: &str, longitude: f64, latitude: f64) -> LocationDraft {
    LocationDraft {
        name: name.to_string(),
        category: "food".to_string(),
        description: "desc".to_string(),
        position: GeoPoint::new(longitude, latitude),
    }
}

/// "Cafe X" at (106.8, -6.2)
pub fn cafe_draft() -> LocationDraft {
    draft("Cafe X", 106.8, -6.2)
}
