//! Domain entities

mod location;

pub use location::{Location, LocationDraft};
