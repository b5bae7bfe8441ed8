//! PlaceMap domain types.
//!
//! The only entity is [`Location`]. Its serde representation is the wire
//! format spoken by the remote location collection, so the client can
//! exchange entities with the API without a separate DTO layer.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Location, LocationDraft};
pub use error::DomainError;
pub use ids::LocationId;
pub use value_objects::{GeoPoint, LatLng};
