//! Service providers for the presentation layer
//!
//! The composition root hands a [`Services`] bundle to the launch builder;
//! components reach it through the hooks below instead of naming adapter
//! types themselves.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::SyncController;
use crate::infrastructure::map::LeafletMap;

/// Concrete controller type used by the UI.
pub type UiSyncController = SyncController<Api>;

#[derive(Clone)]
pub struct Services {
    pub sync: Arc<UiSyncController>,
    /// The renderer itself is only needed to mount the map and read clicks
    pub map: Arc<LeafletMap>,
}

impl Services {
    pub fn new(sync: UiSyncController, map: Arc<LeafletMap>) -> Self {
        Self {
            sync: Arc::new(sync),
            map,
        }
    }
}

/// Hook to access the SyncController from context
pub fn use_sync_controller() -> Arc<UiSyncController> {
    let services = use_context::<Services>();
    services.sync.clone()
}

/// Hook to access the map adapter from context
pub fn use_map() -> Arc<LeafletMap> {
    let services = use_context::<Services>();
    services.map.clone()
}
