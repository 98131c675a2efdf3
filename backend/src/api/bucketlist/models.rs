//! Request payloads for the bucket list endpoints.

use serde::Deserialize;
use validator::Validate;

/// Create request; `name` is required but optional at the serde level so a
/// missing field maps to a 400 validation error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBucketListRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1-255 characters"))]
    pub name: Option<String>,
    pub is_public: Option<bool>,
}

/// Update request; only `name` is mutable, the owner never is.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBucketListRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1-255 characters"))]
    pub name: Option<String>,
}

/// Query parameters for the list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct BucketListQuery {
    /// Substring search on the list name
    pub q: Option<String>,
    /// Page number (1-indexed)
    pub page: Option<u32>,
    /// Number of lists per page
    pub limit: Option<u32>,
}
