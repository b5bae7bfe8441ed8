//! Location entity - A named point of interest
//!
//! Field names follow the remote collection's JSON: the identifier is
//! `_id` and the position lives under `koordinat`.

use serde::{Deserialize, Serialize};

use crate::{GeoPoint, LocationId};

/// A point of interest as returned by the location collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "_id")]
    pub id: LocationId,
    #[serde(default, alias = "nama")]
    pub name: String,
    #[serde(default, alias = "kategori")]
    pub category: String,
    #[serde(default, alias = "deskripsi")]
    pub description: String,
    #[serde(rename = "koordinat", alias = "position")]
    pub position: GeoPoint,
}

/// Body of a create or update request
///
/// Same shape as [`Location`] without the server-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(rename = "koordinat")]
    pub position: GeoPoint,
}
