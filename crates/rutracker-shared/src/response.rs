//! Error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// `{"detail": "..."}` error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human-readable explanation of the failure.
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    // Common error constructors
    pub fn post_not_found() -> Self {
        Self::new("Post not found")
    }

    pub fn create_failed() -> Self {
        Self::new("Failed to create or retrieve post")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}
