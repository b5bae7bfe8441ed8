//! Sync Controller - keeps the displayed directory consistent with the server
//!
//! Every successful mutation is followed by a full reload: the controller
//! never patches the list or the marker set incrementally. Each user action
//! issues exactly one request, without retries.
//!
//! The directory lock is only held for synchronous rendering and lookups,
//! never across an await, so overlapping refreshes simply race and the last
//! response to arrive is what ends up on screen.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use placemap_domain::{Location, LocationId};

use crate::application::dto::{ListAction, ListEntry};
use crate::application::services::LocationService;
use crate::application::ServiceError;
use crate::config::DEFAULT_FOCUS_ZOOM;
use crate::ports::outbound::{ApiPort, DialogPort, MapRendererPort};
use crate::state::{Directory, FormController, MarkerHandle};

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save location.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete location.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load location.";
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this location?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    Deleted,
}

pub struct SyncController<A: ApiPort> {
    locations: Arc<LocationService<A>>,
    map: Arc<dyn MapRendererPort>,
    dialogs: Arc<dyn DialogPort>,
    focus_zoom: u8,
    directory: Arc<RwLock<Directory>>,
}

impl<A: ApiPort> Clone for SyncController<A> {
    fn clone(&self) -> Self {
        Self {
            locations: Arc::clone(&self.locations),
            map: Arc::clone(&self.map),
            dialogs: Arc::clone(&self.dialogs),
            focus_zoom: self.focus_zoom,
            directory: Arc::clone(&self.directory),
        }
    }
}

impl<A: ApiPort> SyncController<A> {
    pub fn new(
        locations: Arc<LocationService<A>>,
        map: Arc<dyn MapRendererPort>,
        dialogs: Arc<dyn DialogPort>,
    ) -> Self {
        Self {
            locations,
            map,
            dialogs,
            focus_zoom: DEFAULT_FOCUS_ZOOM,
            directory: Arc::new(RwLock::new(Directory::new())),
        }
    }

    pub fn with_focus_zoom(mut self, zoom: u8) -> Self {
        self.focus_zoom = zoom;
        self
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn list_entries(&self) -> Vec<ListEntry> {
        self.directory().entries().to_vec()
    }

    pub fn marker_count(&self) -> usize {
        self.directory().markers().len()
    }

    pub fn marker_for(&self, id: &LocationId) -> Option<MarkerHandle> {
        self.directory().markers().get(id).copied()
    }

    pub fn marker_ids(&self) -> Vec<LocationId> {
        self.directory().markers().ids().cloned().collect()
    }

    // -------------------------------------------------------------------------
    // Flows
    // -------------------------------------------------------------------------

    /// Fetch the whole collection and re-render list and markers from scratch
    ///
    /// Returns `false` when the fetch failed; the previous display is left
    /// as it was and the failure is only logged.
    pub async fn refresh_all(&self) -> bool {
        match self.locations.list_locations().await {
            Ok(locations) => {
                self.render_all(&locations);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch locations");
                false
            }
        }
    }

    /// Create or update depending on whether the form is editing
    ///
    /// On success the form is reset to create mode and the directory is
    /// reloaded. On failure the user is alerted and the form keeps its values.
    pub async fn submit(&self, form: &mut FormController) -> Result<(), ServiceError> {
        self.submit_then(form, |_| {}).await
    }

    /// [`Self::submit`], publishing the reset form before the reload starts
    ///
    /// `on_reset` runs only after a successful save.
    pub async fn submit_then(
        &self,
        form: &mut FormController,
        on_reset: impl FnOnce(&FormController),
    ) -> Result<(), ServiceError> {
        if let Err(e) = self.save(form).await {
            tracing::error!(error = %e, "Failed to save location");
            self.dialogs.alert(SAVE_FAILED_MESSAGE);
            return Err(e);
        }

        form.reset();
        on_reset(form);
        self.refresh_all().await;
        Ok(())
    }

    async fn save(&self, form: &FormController) -> Result<(), ServiceError> {
        let draft = form.to_draft()?;
        match form.editing_id() {
            Some(id) => {
                tracing::debug!(%id, "Updating location");
                self.locations.update_location(id, &draft).await
            }
            None => {
                tracing::debug!(name = %draft.name, "Creating location");
                self.locations.create_location(&draft).await
            }
        }
    }

    /// Delete after the user confirms, then reload
    pub async fn delete(&self, id: &LocationId) -> Result<DeleteOutcome, ServiceError> {
        self.delete_then(id, || {}).await
    }

    /// `on_deleted` runs between a successful delete and the reload
    async fn delete_then(
        &self,
        id: &LocationId,
        on_deleted: impl FnOnce(),
    ) -> Result<DeleteOutcome, ServiceError> {
        if !self.dialogs.confirm(DELETE_CONFIRM_MESSAGE).await {
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.locations.delete_location(id).await {
            tracing::error!(%id, error = %e, "Failed to delete location");
            self.dialogs.alert(DELETE_FAILED_MESSAGE);
            return Err(e);
        }

        on_deleted();
        self.refresh_all().await;
        Ok(DeleteOutcome::Deleted)
    }

    /// Load a single location into the form for editing
    ///
    /// A failed fetch is reported with the same alert pattern as mutations
    /// and leaves the form untouched.
    pub async fn select_for_edit(
        &self,
        id: &LocationId,
        form: &mut FormController,
    ) -> Result<(), ServiceError> {
        match self.locations.get_location(id).await {
            Ok(location) => {
                form.enter_edit(&location);
                Ok(())
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "Failed to load location for editing");
                self.dialogs.alert(LOAD_FAILED_MESSAGE);
                Err(e)
            }
        }
    }

    /// Fly to the marker of `id` and open its popup
    ///
    /// Returns `false` without touching the map when no marker is shown for
    /// `id` (e.g. the row was clicked after a reload removed it).
    pub fn pan_to(&self, id: &LocationId) -> bool {
        let Some(handle) = self.marker_for(id) else {
            tracing::debug!(%id, "No marker to pan to");
            return false;
        };
        self.map.fly_to(handle.position, self.focus_zoom);
        self.map.open_popup(handle.key);
        true
    }

    /// Route a list click to the matching flow
    ///
    /// Deleting the location currently loaded in the form also resets it.
    pub async fn dispatch(&self, action: ListAction, form: &mut FormController) {
        self.dispatch_then(action, form, |_| {}).await
    }

    /// [`Self::dispatch`], publishing a delete-triggered form reset before
    /// the reload starts
    pub async fn dispatch_then(
        &self,
        action: ListAction,
        form: &mut FormController,
        on_reset: impl FnOnce(&FormController),
    ) {
        match action {
            ListAction::Select(id) => {
                self.pan_to(&id);
            }
            ListAction::Edit(id) => {
                let _ = self.select_for_edit(&id, form).await;
            }
            ListAction::Delete(id) => {
                let editing = form.editing_id() == Some(&id);
                let reset_form = || {
                    if editing {
                        form.reset();
                        on_reset(form);
                    }
                };
                let _ = self.delete_then(&id, reset_form).await;
            }
        }
    }

    fn render_all(&self, locations: &[Location]) {
        self.directory_mut().rebuild(self.map.as_ref(), locations);
        tracing::debug!(count = locations.len(), "Rendered locations");
    }

    fn directory(&self) -> RwLockReadGuard<'_, Directory> {
        self.directory.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn directory_mut(&self) -> RwLockWriteGuard<'_, Directory> {
        self.directory.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::infrastructure::testing::{
        fixtures, InMemoryLocationApi, RecordingMap, RequestMethod, ScriptedDialogs,
    };
    use crate::ports::outbound::{MockDialogPort, MockMapRendererPort};
    use crate::state::{FormField, FormMode, SUBMIT_LABEL_CREATE};
    use placemap_domain::LatLng;

    struct Harness {
        api: InMemoryLocationApi,
        map: RecordingMap,
        dialogs: ScriptedDialogs,
        sync: SyncController<Api>,
    }

    fn harness() -> Harness {
        let api = InMemoryLocationApi::new("/lokasi");
        let map = RecordingMap::new();
        let dialogs = ScriptedDialogs::new();
        let locations = Arc::new(LocationService::new(
            Api::new(Arc::new(api.clone())),
            "/lokasi",
        ));
        let sync = SyncController::new(locations, Arc::new(map.clone()), Arc::new(dialogs.clone()));
        Harness {
            api,
            map,
            dialogs,
            sync,
        }
    }

    fn filled_form() -> FormController {
        let mut form = FormController::new();
        form.set_field(FormField::Name, "Cafe X");
        form.set_field(FormField::Category, "food");
        form.set_field(FormField::Description, "desc");
        form.set_field(FormField::Longitude, "106.8");
        form.set_field(FormField::Latitude, "-6.2");
        form
    }

    fn assert_consistent(h: &Harness) {
        let server_ids: Vec<LocationId> = h.api.stored().into_iter().map(|l| l.id).collect();
        let entries = h.sync.list_entries();
        assert_eq!(entries.len(), server_ids.len());
        assert_eq!(h.sync.marker_count(), server_ids.len());
        assert_eq!(h.map.marker_count(), server_ids.len());
        for id in h.sync.marker_ids() {
            assert!(server_ids.contains(&id), "orphan marker for {id}");
        }
    }

    #[tokio::test]
    async fn refresh_renders_every_returned_location() {
        let h = harness();
        h.api.seed(fixtures::cafe_draft());
        h.api.seed(fixtures::draft("Museum", 106.82, -6.17));
        h.api.seed(fixtures::draft("Park", 106.83, -6.18));

        assert!(h.sync.refresh_all().await);

        assert_consistent(&h);
        let names: Vec<String> = h.sync.list_entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Cafe X", "Museum", "Park"]);
    }

    #[tokio::test]
    async fn refresh_of_empty_collection_clears_display() {
        let h = harness();
        let id = h.api.seed(fixtures::cafe_draft());
        h.sync.refresh_all().await;
        h.api.remove(&id);

        assert!(h.sync.refresh_all().await);

        assert!(h.sync.list_entries().is_empty());
        assert_eq!(h.sync.marker_count(), 0);
        assert_eq!(h.map.marker_count(), 0);
    }

    #[tokio::test]
    async fn failed_refresh_leaves_display_stale_and_silent() {
        let h = harness();
        h.api.seed(fixtures::cafe_draft());
        h.sync.refresh_all().await;
        h.api.seed(fixtures::draft("Museum", 106.82, -6.17));
        h.api.fail_next(RequestMethod::Get, 503);

        assert!(!h.sync.refresh_all().await);

        assert_eq!(h.sync.list_entries().len(), 1);
        assert_eq!(h.map.marker_count(), 1);
        assert!(h.dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn malformed_list_body_is_treated_like_a_network_failure() {
        let h = harness();
        h.api.seed(fixtures::cafe_draft());
        h.sync.refresh_all().await;
        h.api.respond_to_list_with(serde_json::json!([{ "_id": 1 }]));

        assert!(!h.sync.refresh_all().await);

        assert_eq!(h.sync.list_entries().len(), 1);
        assert!(h.dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn submit_without_identifier_creates() {
        let h = harness();
        let mut form = filled_form();

        h.sync.submit(&mut form).await.unwrap();

        let requests = h.api.requests();
        assert_eq!(requests[0].method, RequestMethod::Post);
        assert_eq!(requests[0].path, "/lokasi");
        assert_eq!(requests[1].method, RequestMethod::Get);
        assert_eq!(h.api.stored().len(), 1);
    }

    #[tokio::test]
    async fn submit_while_editing_updates_that_location() {
        let h = harness();
        let id = h.api.seed(fixtures::cafe_draft());
        let mut form = FormController::new();
        h.sync.select_for_edit(&id, &mut form).await.unwrap();
        form.set_field(FormField::Name, "Cafe Y");

        h.sync.submit(&mut form).await.unwrap();

        let update = h
            .api
            .requests()
            .into_iter()
            .find(|r| r.method == RequestMethod::Put)
            .unwrap();
        assert_eq!(update.path, format!("/lokasi?id={id}"));
        assert_eq!(h.api.stored()[0].name, "Cafe Y");
        assert_eq!(h.sync.list_entries()[0].name, "Cafe Y");
    }

    #[tokio::test]
    async fn successful_submit_resets_form_to_create_mode() {
        let h = harness();
        let id = h.api.seed(fixtures::cafe_draft());
        let mut form = FormController::new();
        h.sync.select_for_edit(&id, &mut form).await.unwrap();

        h.sync.submit(&mut form).await.unwrap();

        assert_eq!(form, FormController::new());
        assert_eq!(form.submit_label(), SUBMIT_LABEL_CREATE);
        assert!(!form.cancel_visible());
    }

    #[tokio::test]
    async fn reset_form_is_published_before_the_reload() {
        let h = harness();
        let api = h.api.clone();
        let mut form = filled_form();
        let mut published = None;

        h.sync
            .submit_then(&mut form, |reset| {
                let sent: Vec<RequestMethod> = api.requests().iter().map(|r| r.method).collect();
                published = Some((reset.clone(), sent));
            })
            .await
            .unwrap();

        let (reset, sent) = published.unwrap();
        assert_eq!(reset, FormController::new());
        assert_eq!(sent, vec![RequestMethod::Post]);
        assert_eq!(
            h.api.requests().last().map(|r| r.method),
            Some(RequestMethod::Get)
        );
    }

    #[tokio::test]
    async fn failed_submit_publishes_no_reset() {
        let h = harness();
        h.api.fail_next(RequestMethod::Post, 500);
        let mut form = filled_form();
        let mut published = false;

        let result = h.sync.submit_then(&mut form, |_| published = true).await;

        assert!(result.is_err());
        assert!(!published);
        assert_eq!(form, filled_form());
    }

    #[tokio::test]
    async fn deleting_the_edited_location_publishes_reset_before_the_reload() {
        let h = harness();
        let id = h.api.seed(fixtures::cafe_draft());
        h.sync.refresh_all().await;
        let mut form = FormController::new();
        h.sync.select_for_edit(&id, &mut form).await.unwrap();
        h.dialogs.answer_confirm(true);
        let api = h.api.clone();
        let before = api.requests().len();
        let mut published = None;

        h.sync
            .dispatch_then(ListAction::Delete(id.clone()), &mut form, |reset| {
                let sent: Vec<RequestMethod> =
                    api.requests()[before..].iter().map(|r| r.method).collect();
                published = Some((reset.mode().clone(), sent));
            })
            .await;

        assert_eq!(
            published,
            Some((FormMode::Create, vec![RequestMethod::Delete]))
        );
        assert_eq!(form.mode(), &FormMode::Create);
        assert!(h.sync.list_entries().is_empty());
    }

    #[tokio::test]
    async fn deleting_another_location_leaves_the_form_editing() {
        let h = harness();
        let edited = h.api.seed(fixtures::cafe_draft());
        let other = h.api.seed(fixtures::draft("Museum", 106.82, -6.17));
        h.sync.refresh_all().await;
        let mut form = FormController::new();
        h.sync.select_for_edit(&edited, &mut form).await.unwrap();
        h.dialogs.answer_confirm(true);
        let mut published = false;

        h.sync
            .dispatch_then(ListAction::Delete(other), &mut form, |_| published = true)
            .await;

        assert!(!published);
        assert_eq!(form.mode(), &FormMode::Edit(edited));
        assert_eq!(h.sync.list_entries().len(), 1);
    }

    #[tokio::test]
    async fn failed_submit_alerts_and_keeps_form_populated() {
        let h = harness();
        h.api.fail_next(RequestMethod::Post, 500);
        let mut form = filled_form();
        let before = form.clone();

        let result = h.sync.submit(&mut form).await;

        assert!(result.is_err());
        assert_eq!(form, before);
        assert_eq!(h.dialogs.alerts(), vec![SAVE_FAILED_MESSAGE.to_string()]);
        assert_eq!(h.api.requests().len(), 1);
    }

    #[tokio::test]
    async fn failed_submit_can_be_retried() {
        let h = harness();
        h.api.fail_next(RequestMethod::Post, 500);
        let mut form = filled_form();
        let _ = h.sync.submit(&mut form).await;

        h.sync.submit(&mut form).await.unwrap();

        assert_eq!(h.api.stored().len(), 1);
        assert_eq!(h.sync.list_entries().len(), 1);
    }

    #[tokio::test]
    async fn unparseable_coordinates_alert_without_a_request() {
        let h = harness();
        let mut form = filled_form();
        form.set_field(FormField::Latitude, "");

        let result = h.sync.submit(&mut form).await;

        assert!(matches!(result, Err(ServiceError::InvalidForm(_))));
        assert!(h.api.requests().is_empty());
        assert_eq!(h.dialogs.alerts(), vec![SAVE_FAILED_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn confirmed_delete_removes_location_and_reloads() {
        let h = harness();
        let id = h.api.seed(fixtures::cafe_draft());
        h.api.seed(fixtures::draft("Museum", 106.82, -6.17));
        h.sync.refresh_all().await;
        h.dialogs.answer_confirm(true);

        let outcome = h.sync.delete(&id).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(h.dialogs.confirmations(), vec![DELETE_CONFIRM_MESSAGE.to_string()]);
        assert!(h.sync.marker_for(&id).is_none());
        assert_consistent(&h);
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let h = harness();
        let id = h.api.seed(fixtures::cafe_draft());
        h.sync.refresh_all().await;
        let requests_before = h.api.requests().len();
        h.dialogs.answer_confirm(false);

        let outcome = h.sync.delete(&id).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(h.api.requests().len(), requests_before);
        assert_eq!(h.sync.list_entries().len(), 1);
        assert!(h.sync.marker_for(&id).is_some());
    }

    #[tokio::test]
    async fn failed_delete_alerts_and_keeps_display() {
        let h = harness();
        let id = h.api.seed(fixtures::cafe_draft());
        h.sync.refresh_all().await;
        h.dialogs.answer_confirm(true);
        h.api.fail_next(RequestMethod::Delete, 500);

        assert!(h.sync.delete(&id).await.is_err());

        assert_eq!(h.dialogs.alerts(), vec![DELETE_FAILED_MESSAGE.to_string()]);
        assert_eq!(h.sync.list_entries().len(), 1);
        assert_eq!(h.api.stored().len(), 1);
    }

    #[tokio::test]
    async fn failed_edit_selection_alerts_and_leaves_form() {
        let h = harness();
        let mut form = filled_form();
        let before = form.clone();

        let result = h.sync.select_for_edit(&LocationId::new("gone"), &mut form).await;

        assert!(result.is_err());
        assert_eq!(form, before);
        assert_eq!(h.dialogs.alerts(), vec![LOAD_FAILED_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn pan_to_flies_to_marker_and_opens_popup() {
        let h = harness();
        let id = h.api.seed(fixtures::cafe_draft());
        h.sync.refresh_all().await;
        let handle = h.sync.marker_for(&id).unwrap();

        assert!(h.sync.pan_to(&id));

        assert_eq!(h.map.flights(), vec![(LatLng::new(-6.2, 106.8), DEFAULT_FOCUS_ZOOM)]);
        assert_eq!(h.map.opened_popups(), vec![handle.key]);
    }

    #[test]
    fn pan_to_unknown_identifier_is_a_no_op() {
        let api = InMemoryLocationApi::new("/lokasi");
        let locations = Arc::new(LocationService::new(Api::new(Arc::new(api)), "/lokasi"));
        let mut map = MockMapRendererPort::new();
        map.expect_fly_to().never();
        map.expect_open_popup().never();
        let mut dialogs = MockDialogPort::new();
        dialogs.expect_alert().never();
        let sync = SyncController::new(locations, Arc::new(map), Arc::new(dialogs));

        assert!(!sync.pan_to(&LocationId::new("missing")));
    }

    #[tokio::test]
    async fn dispatch_routes_each_list_action() {
        let h = harness();
        let id = h.api.seed(fixtures::cafe_draft());
        h.sync.refresh_all().await;
        let mut form = FormController::new();

        h.sync.dispatch(ListAction::Select(id.clone()), &mut form).await;
        assert_eq!(h.map.flights().len(), 1);

        h.sync.dispatch(ListAction::Edit(id.clone()), &mut form).await;
        assert_eq!(form.mode(), &FormMode::Edit(id.clone()));

        h.dialogs.answer_confirm(true);
        h.sync.dispatch(ListAction::Delete(id.clone()), &mut form).await;
        assert!(h.api.stored().is_empty());
        assert!(h.sync.list_entries().is_empty());
        // The edited location is gone, so the form drops back to create mode
        assert_eq!(form.mode(), &FormMode::Create);
    }

    #[tokio::test]
    async fn created_location_shows_up_with_marker_and_popup() {
        let h = harness();
        let mut form = filled_form();

        h.sync.submit(&mut form).await.unwrap();

        let entries = h.sync.list_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Cafe X");
        assert_eq!(entries[0].category, "food");

        let handle = h.sync.marker_for(&entries[0].id).unwrap();
        let (position, popup) = h.map.marker(handle.key).unwrap();
        assert_eq!(position, LatLng::new(-6.2, 106.8));
        assert!(popup.to_html().contains("Cafe X"));
        assert!(popup.to_html().contains("desc"));
    }

    #[tokio::test]
    async fn mutations_keep_rows_markers_and_server_in_step() {
        let h = harness();
        h.dialogs.answer_confirm(true);

        let mut form = filled_form();
        h.sync.submit(&mut form).await.unwrap();
        let mut form = filled_form();
        form.set_field(FormField::Name, "Museum");
        h.sync.submit(&mut form).await.unwrap();
        assert_consistent(&h);

        let first = h.sync.list_entries()[0].id.clone();
        h.sync.delete(&first).await.unwrap();
        assert_consistent(&h);

        let remaining = h.sync.list_entries()[0].id.clone();
        h.sync.select_for_edit(&remaining, &mut form).await.unwrap();
        form.set_field(FormField::Category, "culture");
        h.sync.submit(&mut form).await.unwrap();
        assert_consistent(&h);
        assert_eq!(h.sync.list_entries()[0].category, "culture");
    }
}
