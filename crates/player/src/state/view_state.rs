//! View state - the rendered list and marker set
//!
//! [`Directory`] pairs the list panel rows with the [`ViewStateStore`] so the
//! two can only ever be rebuilt together. Both are derived from a single
//! successful collection fetch and are never patched incrementally.

use std::collections::HashMap;

use placemap_domain::{LatLng, Location, LocationId};

use crate::application::dto::ListEntry;
use crate::ports::outbound::{MapRendererPort, MarkerKey, MarkerPopup};

/// A marker currently on the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerHandle {
    pub key: MarkerKey,
    /// Display-order coordinates the marker was placed at
    pub position: LatLng,
}

/// Mapping from location identifier to its marker
///
/// Only the sync controller mutates this (through [`Directory`]); everything
/// else reads.
#[derive(Debug, Default)]
pub struct ViewStateStore {
    markers: HashMap<LocationId, MarkerHandle>,
}

impl ViewStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &LocationId) -> Option<&MarkerHandle> {
        self.markers.get(id)
    }

    pub fn contains(&self, id: &LocationId) -> bool {
        self.markers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &LocationId> {
        self.markers.keys()
    }

    pub(crate) fn insert(&mut self, id: LocationId, handle: MarkerHandle) {
        self.markers.insert(id, handle);
    }

    /// Empty the store, yielding every handle so its marker can be removed
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (LocationId, MarkerHandle)> + '_ {
        self.markers.drain()
    }
}

/// Everything the user sees derived from the last successful fetch
#[derive(Debug, Default)]
pub struct Directory {
    entries: Vec<ListEntry>,
    markers: ViewStateStore,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// List rows in server order
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn markers(&self) -> &ViewStateStore {
        &self.markers
    }

    /// Throw away the current rows and markers and render `locations`
    ///
    /// A location whose identifier repeats an earlier one in the same batch
    /// is skipped so that rows and markers stay one-to-one.
    pub(crate) fn rebuild(&mut self, map: &dyn MapRendererPort, locations: &[Location]) {
        self.entries.clear();
        for (_, handle) in self.markers.drain() {
            map.remove_marker(handle.key);
        }

        for location in locations {
            if self.markers.contains(&location.id) {
                tracing::warn!(id = %location.id, "Skipping duplicate location id in response");
                continue;
            }

            let position = location.position.to_lat_lng();
            let popup = MarkerPopup::new(location.name.clone(), location.description.clone());
            let key = map.add_marker(position, &popup);

            self.entries.push(ListEntry::from(location));
            self.markers
                .insert(location.id.clone(), MarkerHandle { key, position });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{fixtures, RecordingMap};

    #[test]
    fn rebuild_renders_one_row_and_marker_per_location() {
        let map = RecordingMap::new();
        let mut directory = Directory::new();
        let locations = vec![
            fixtures::location("a", "Cafe X", 106.8, -6.2),
            fixtures::location("b", "Museum", 106.82, -6.17),
        ];

        directory.rebuild(&map, &locations);

        assert_eq!(directory.entries().len(), 2);
        assert_eq!(directory.markers().len(), 2);
        assert_eq!(map.marker_count(), 2);
        for location in &locations {
            assert!(directory.markers().contains(&location.id));
        }
    }

    #[test]
    fn rebuild_removes_every_previous_marker() {
        let map = RecordingMap::new();
        let mut directory = Directory::new();
        directory.rebuild(&map, &[fixtures::location("a", "Old", 1.0, 2.0)]);
        let old_key = directory.markers().get(&"a".into()).unwrap().key;

        directory.rebuild(&map, &[fixtures::location("b", "New", 3.0, 4.0)]);

        assert_eq!(map.removed(), vec![old_key]);
        assert_eq!(map.marker_count(), 1);
        assert!(!directory.markers().contains(&"a".into()));
        assert_eq!(directory.entries()[0].name, "New");
    }

    #[test]
    fn markers_are_placed_in_display_order() {
        let map = RecordingMap::new();
        let mut directory = Directory::new();

        directory.rebuild(&map, &[fixtures::location("a", "Cafe X", 106.8, -6.2)]);

        let handle = directory.markers().get(&"a".into()).unwrap();
        assert_eq!(handle.position, LatLng::new(-6.2, 106.8));
        assert_eq!(map.marker(handle.key).unwrap().0, LatLng::new(-6.2, 106.8));
    }

    #[test]
    fn duplicate_ids_keep_rows_and_markers_aligned() {
        let map = RecordingMap::new();
        let mut directory = Directory::new();

        directory.rebuild(
            &map,
            &[
                fixtures::location("a", "First", 1.0, 1.0),
                fixtures::location("a", "Second", 2.0, 2.0),
            ],
        );

        assert_eq!(directory.entries().len(), 1);
        assert_eq!(directory.markers().len(), 1);
        assert_eq!(map.marker_count(), 1);
        assert_eq!(directory.entries()[0].name, "First");
    }
}
