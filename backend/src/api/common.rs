//! Error handling and pagination utilities for API responses.
//!
//! Provides conversion between service-layer errors and HTTP responses, and
//! the pagination filter shared by list endpoints.
//!
//! # Response Format
//! All errors return a consistent JSON body containing:
//! - `error`: Human-readable message
//! - `error_type`: Machine-readable error category

use crate::errors::ServiceError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable error type identifier
    pub error_type: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_type: error_type.into(),
        }
    }
}

/// Pagination parameters for list requests
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PaginationFilter {
    /// Page number (1-indexed)
    pub page: Option<u32>,
    /// Number of items per page
    pub limit: Option<u32>,
}

impl PaginationFilter {
    /// Get page number with default
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Get limit with default, capped at 100
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }

    /// Calculate offset for database queries. Widens before multiplying so
    /// a huge page number cannot overflow.
    pub fn offset(&self) -> u64 {
        (self.page() as u64 - 1) * self.limit() as u64
    }
}

/// Runs validator-derive checks and folds failures into one validation error.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), ServiceError> {
    if let Err(validation_errors) = request.validate() {
        let error_messages: Vec<String> = validation_errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error.message.as_ref().unwrap_or(&"Invalid value".into())
                    )
                })
            })
            .collect();
        return Err(ServiceError::validation(error_messages.join(", ")));
    }
    Ok(())
}

/// Requires a field to be present and non-blank.
pub fn require_field<'v>(value: Option<&'v str>, field: &str) -> Result<&'v str, ServiceError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServiceError::validation(format!("{} is required", field)))
}

/// Converts ServiceError to an HTTP status and serialized error body
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, String) {
    let (status, error_type, message) = match error {
        ServiceError::Validation { message } => {
            (StatusCode::BAD_REQUEST, "validation_error", message)
        }
        ServiceError::Unauthorized { message } => {
            (StatusCode::UNAUTHORIZED, "unauthorized", message)
        }
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            "not_found",
            format!("{} '{}' not found", entity, identifier),
        ),
        // Duplicate usernames surface as 400, matching the public contract.
        ServiceError::AlreadyExists { entity, identifier } => (
            StatusCode::BAD_REQUEST,
            "already_exists",
            format!("{} '{}' already exists", entity, identifier),
        ),
        ServiceError::Database { source } => {
            tracing::error!("Database error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                "Internal server error".to_string(),
            )
        }
    };

    let body = ErrorResponse::new(message, error_type);
    (status, serde_json::to_string(&body).unwrap())
}
