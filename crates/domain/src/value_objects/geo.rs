//! Geographic coordinates
//!
//! Two orderings exist and must never be mixed up:
//! - [`GeoPoint`] is the wire order, a GeoJSON `Point` whose `coordinates`
//!   are `[longitude, latitude]`.
//! - [`LatLng`] is the display order used by the map renderer.
//!
//! Conversion between them only happens through `to_lat_lng` and
//! `to_geo_point`.

use serde::{Deserialize, Serialize};

use crate::DomainError;

const POINT_TYPE: &str = "Point";

/// A geographic point in wire order (longitude first)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointGeometry", into = "PointGeometry")]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Reorder into the `[lat, lng]` pair the map renderer expects
    pub fn to_lat_lng(self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// A geographic point in display order (latitude first)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn to_geo_point(self) -> GeoPoint {
        GeoPoint {
            longitude: self.lng,
            latitude: self.lat,
        }
    }
}

/// GeoJSON geometry as it appears under the `koordinat` key
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PointGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<f64>,
}

impl TryFrom<PointGeometry> for GeoPoint {
    type Error = DomainError;

    fn try_from(geometry: PointGeometry) -> Result<Self, Self::Error> {
        if geometry.kind != POINT_TYPE {
            return Err(DomainError::UnsupportedGeometry(geometry.kind));
        }
        let &[longitude, latitude] = geometry.coordinates.as_slice() else {
            return Err(DomainError::CoordinateCount(geometry.coordinates.len()));
        };
        for value in [longitude, latitude] {
            if !value.is_finite() {
                return Err(DomainError::NonFiniteCoordinate(value));
            }
        }
        Ok(Self::new(longitude, latitude))
    }
}

impl From<GeoPoint> for PointGeometry {
    fn from(point: GeoPoint) -> Self {
        Self {
            kind: POINT_TYPE.to_string(),
            coordinates: vec![point.longitude, point.latitude],
        }
    }
}
