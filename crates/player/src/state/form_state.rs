//! Location form state
//!
//! The form is either creating a new location or editing an existing one.
//! In edit mode it carries the identifier of the location being edited (the
//! hidden id field of the page form).

use placemap_domain::{GeoPoint, LatLng, Location, LocationDraft, LocationId};
use thiserror::Error;

pub const SUBMIT_LABEL_CREATE: &str = "Add Location";
pub const SUBMIT_LABEL_UPDATE: &str = "Update Location";

/// Fractional digits written when a map click fills the coordinate fields
const CLICK_COORDINATE_PRECISION: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(LocationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Description,
    Longitude,
    Latitude,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::Longitude => "Longitude",
            Self::Latitude => "Latitude",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("{} is not a valid number: {value:?}", .field.label())]
    InvalidCoordinate { field: FormField, value: String },
}

/// Create/edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    mode: FormMode,
    name: String,
    category: String,
    description: String,
    longitude: String,
    latitude: String,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Identifier of the location being edited, if any
    pub fn editing_id(&self) -> Option<&LocationId> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => SUBMIT_LABEL_CREATE,
            FormMode::Edit(_) => SUBMIT_LABEL_UPDATE,
        }
    }

    pub fn cancel_visible(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Description => &self.description,
            FormField::Longitude => &self.longitude,
            FormField::Latitude => &self.latitude,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Category => self.category = value,
            FormField::Description => self.description = value,
            FormField::Longitude => self.longitude = value,
            FormField::Latitude => self.latitude = value,
        }
    }

    /// Populate every field from `location` and switch to edit mode
    pub fn enter_edit(&mut self, location: &Location) {
        self.mode = FormMode::Edit(location.id.clone());
        self.name = location.name.clone();
        self.category = location.category.clone();
        self.description = location.description.clone();
        self.longitude = location.position.longitude.to_string();
        self.latitude = location.position.latitude.to_string();
    }

    /// Clear every field, including the edit identifier
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fill the coordinate fields from a map click; the mode is left alone
    pub fn capture_click_as_coordinates(&mut self, point: LatLng) {
        self.longitude = format!("{:.*}", CLICK_COORDINATE_PRECISION, point.lng);
        self.latitude = format!("{:.*}", CLICK_COORDINATE_PRECISION, point.lat);
    }

    /// Build the request body from the current field values
    pub fn to_draft(&self) -> Result<LocationDraft, FormError> {
        let longitude = parse_coordinate(FormField::Longitude, &self.longitude)?;
        let latitude = parse_coordinate(FormField::Latitude, &self.latitude)?;
        Ok(LocationDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            position: GeoPoint::new(longitude, latitude),
        })
    }
}

fn parse_coordinate(field: FormField, raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FormError::InvalidCoordinate {
            field,
            value: raw.to_string(),
        })
}
