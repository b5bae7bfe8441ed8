//! Location Service - Application service for the location collection
//!
//! Every operation maps to exactly one HTTP request against the collection
//! resource. Single-item operations address the item with an `?id=` query
//! parameter rather than a path segment.

use placemap_domain::{Location, LocationDraft, LocationId};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

/// Location service for managing locations
///
/// Depends only on `ApiPort`, not on a concrete HTTP client.
#[derive(Clone)]
pub struct LocationService<A: ApiPort> {
    api: A,
    collection: String,
}

impl<A: ApiPort> LocationService<A> {
    /// Create a service for the collection at `collection` (e.g. `/ProjectSmZ/lokasi`)
    pub fn new(api: A, collection: impl Into<String>) -> Self {
        Self {
            api,
            collection: collection.into(),
        }
    }

    /// Path addressing a single location
    pub fn item_path(&self, id: &LocationId) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(id.as_str().as_bytes()).collect();
        format!("{}?id={}", self.collection, encoded)
    }

    /// List all locations
    ///
    /// A `null` body is treated as an empty collection.
    pub async fn list_locations(&self) -> Result<Vec<Location>, ServiceError> {
        let locations: Option<Vec<Location>> = self.api.get(&self.collection).await?;
        Ok(locations.unwrap_or_default())
    }

    /// Fetch a single location
    pub async fn get_location(&self, id: &LocationId) -> Result<Location, ServiceError> {
        let location = self.api.get(&self.item_path(id)).await?;
        Ok(location)
    }

    /// Create a location; the server assigns its identifier
    pub async fn create_location(&self, draft: &LocationDraft) -> Result<(), ServiceError> {
        self.api.post_no_response(&self.collection, draft).await?;
        Ok(())
    }

    /// Replace the editable fields of an existing location
    pub async fn update_location(
        &self,
        id: &LocationId,
        draft: &LocationDraft,
    ) -> Result<(), ServiceError> {
        self.api.put_no_response(&self.item_path(id), draft).await?;
        Ok(())
    }

    /// Delete a location
    pub async fn delete_location(&self, id: &LocationId) -> Result<(), ServiceError> {
        self.api.delete(&self.item_path(id)).await?;
        Ok(())
    }
}
