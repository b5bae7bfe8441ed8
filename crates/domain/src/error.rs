//! Error types for the domain layer

use thiserror::Error;

/// Errors raised while constructing or decoding domain values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A geometry that is not a GeoJSON point
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometry(String),

    /// Point coordinates that are not a `[longitude, latitude]` pair
    #[error("Expected 2 coordinates, got {0}")]
    CoordinateCount(usize),

    /// A coordinate that is NaN or infinite
    #[error("Coordinate is not a finite number: {0}")]
    NonFiniteCoordinate(f64),
}
