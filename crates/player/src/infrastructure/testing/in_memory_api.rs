//! In-memory location collection behind `RawApiPort`
//!
//! Behaves like the remote service: the collection root lists and creates,
//! `?id=` addresses single items, identifiers are assigned on create. Every
//! request is recorded, and failures can be injected per HTTP method.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use placemap_domain::{Location, LocationDraft, LocationId};
use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: RequestMethod,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct State {
    locations: Vec<Location>,
    next_id: u64,
    requests: Vec<RecordedRequest>,
    failures: Vec<(RequestMethod, u16)>,
    list_override: Option<Value>,
}

#[derive(Clone)]
pub struct InMemoryLocationApi {
    collection: Arc<str>,
    state: Arc<Mutex<State>>,
}

impl InMemoryLocationApi {
    pub fn new(collection: &str) -> Self {
        Self {
            collection: Arc::from(collection),
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a location directly, without recording a request
    pub fn seed(&self, draft: LocationDraft) -> LocationId {
        let mut state = self.state();
        let id = assign_id(&mut state);
        state.locations.push(with_id(id.clone(), draft));
        id
    }

    /// Drop a location directly, without recording a request
    pub fn remove(&self, id: &LocationId) {
        self.state().locations.retain(|l| &l.id != id);
    }

    pub fn stored(&self) -> Vec<Location> {
        self.state().locations.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    /// Make the next request with `method` fail with `status`
    pub fn fail_next(&self, method: RequestMethod, status: u16) {
        self.state().failures.push((method, status));
    }

    /// Answer list requests with `body` instead of the stored collection
    pub fn respond_to_list_with(&self, body: Value) {
        self.state().list_override = Some(body);
    }

    fn handle(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let mut state = self.state();
        state.requests.push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });

        if let Some(index) = state.failures.iter().position(|(m, _)| *m == method) {
            let (_, status) = state.failures.remove(index);
            return Err(http_error(status, "injected failure"));
        }

        let target = self.parse_target(path)?;
        match (method, target) {
            (RequestMethod::Get, None) => match &state.list_override {
                Some(body) => Ok(body.clone()),
                None => to_json(&state.locations),
            },
            (RequestMethod::Get, Some(id)) => state
                .locations
                .iter()
                .find(|l| l.id == id)
                .map(to_json)
                .unwrap_or_else(|| Err(http_error(404, "not found"))),
            (RequestMethod::Post, None) => {
                let draft = parse_draft(body)?;
                let id = assign_id(&mut state);
                state.locations.push(with_id(id.clone(), draft));
                Ok(serde_json::json!({ "insertedID": id }))
            }
            (RequestMethod::Put, Some(id)) => {
                let draft = parse_draft(body)?;
                let location = state
                    .locations
                    .iter_mut()
                    .find(|l| l.id == id)
                    .ok_or_else(|| http_error(404, "not found"))?;
                *location = with_id(id, draft);
                Ok(Value::Null)
            }
            (RequestMethod::Delete, Some(id)) => {
                let before = state.locations.len();
                state.locations.retain(|l| l.id != id);
                if state.locations.len() == before {
                    return Err(http_error(404, "not found"));
                }
                Ok(Value::Null)
            }
            _ => Err(http_error(405, "method not allowed")),
        }
    }

    /// `None` for the collection root, `Some(id)` for `?id=<id>`
    fn parse_target(&self, path: &str) -> Result<Option<LocationId>, ApiError> {
        let rest = path
            .strip_prefix(&*self.collection)
            .ok_or_else(|| http_error(404, "unknown path"))?;
        if rest.is_empty() {
            return Ok(None);
        }
        let query = rest
            .strip_prefix('?')
            .ok_or_else(|| http_error(404, "unknown path"))?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "id")
            .map(|(_, value)| Some(LocationId::new(value.into_owned())))
            .ok_or_else(|| http_error(400, "missing id"))
    }
}

fn assign_id(state: &mut State) -> LocationId {
    state.next_id += 1;
    LocationId::new(format!("loc-{}", state.next_id))
}

fn with_id(id: LocationId, draft: LocationDraft) -> Location {
    Location {
        id,
        name: draft.name,
        category: draft.category,
        description: draft.description,
        position: draft.position,
    }
}

fn parse_draft(body: Option<&Value>) -> Result<LocationDraft, ApiError> {
    let body = body.ok_or_else(|| http_error(400, "missing body"))?;
    serde_json::from_value(body.clone()).map_err(|e| http_error(400, &e.to_string()))
}

fn to_json<T: serde::Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| http_error(500, &e.to_string()))
}

fn http_error(status: u16, message: &str) -> ApiError {
    ApiError::HttpError {
        status,
        message: message.to_string(),
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for InMemoryLocationApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.handle(RequestMethod::Get, path, None)
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.handle(RequestMethod::Post, path, Some(body)).map(|_| ())
    }

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.handle(RequestMethod::Put, path, Some(body)).map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.handle(RequestMethod::Delete, path, None).map(|_| ())
    }
}
