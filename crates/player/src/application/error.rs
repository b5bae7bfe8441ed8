//! Service layer error types
//!
//! This module defines errors that can occur in the application service layer,
//! abstracting over the HTTP adapter and form parsing.

use thiserror::Error;

use crate::ports::outbound::ApiError;
use crate::state::FormError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The HTTP request failed or returned a non-success status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The form could not be turned into a request body
    #[error(transparent)]
    InvalidForm(#[from] FormError),
}

impl ServiceError {
    /// Check if the server answered with 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Api(ApiError::HttpError { status: 404, .. }))
    }
}
