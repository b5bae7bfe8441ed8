//! One row of the location list panel

use placemap_domain::{Location, LocationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: LocationId,
    pub name: String,
    pub category: String,
}

impl From<&Location> for ListEntry {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.clone(),
            name: location.name.clone(),
            category: location.category.clone(),
        }
    }
}
