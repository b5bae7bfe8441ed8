//! `MapRendererPort` that records every call instead of drawing

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use placemap_domain::LatLng;

use crate::ports::outbound::{MapRendererPort, MarkerKey, MarkerPopup};

#[derive(Default)]
struct State {
    next_key: u64,
    markers: BTreeMap<MarkerKey, (LatLng, MarkerPopup)>,
    removed: Vec<MarkerKey>,
    flights: Vec<(LatLng, u8)>,
    opened: Vec<MarkerKey>,
}

#[derive(Clone, Default)]
pub struct RecordingMap {
    state: Arc<Mutex<State>>,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Markers currently on the map
    pub fn marker_count(&self) -> usize {
        self.state().markers.len()
    }

    pub fn marker(&self, key: MarkerKey) -> Option<(LatLng, MarkerPopup)> {
        self.state().markers.get(&key).cloned()
    }

    pub fn removed(&self) -> Vec<MarkerKey> {
        self.state().removed.clone()
    }

    pub fn flights(&self) -> Vec<(LatLng, u8)> {
        self.state().flights.clone()
    }

    pub fn opened_popups(&self) -> Vec<MarkerKey> {
        self.state().opened.clone()
    }
}

impl MapRendererPort for RecordingMap {
    fn add_marker(&self, position: LatLng, popup: &MarkerPopup) -> MarkerKey {
        let mut state = self.state();
        state.next_key += 1;
        let key = MarkerKey(state.next_key);
        state.markers.insert(key, (position, popup.clone()));
        key
    }

    fn remove_marker(&self, key: MarkerKey) {
        let mut state = self.state();
        state.markers.remove(&key);
        state.removed.push(key);
    }

    fn fly_to(&self, position: LatLng, zoom: u8) {
        self.state().flights.push((position, zoom));
    }

    fn open_popup(&self, key: MarkerKey) {
        self.state().opened.push(key);
    }
}
