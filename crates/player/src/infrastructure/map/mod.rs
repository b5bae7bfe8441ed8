//! Tile map adapter

mod leaflet;

pub use leaflet::{next_click, LeafletMap};
