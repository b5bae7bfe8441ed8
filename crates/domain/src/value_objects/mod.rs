//! Value objects - Immutable objects defined by their attributes

mod geo;

pub use geo::{GeoPoint, LatLng};
