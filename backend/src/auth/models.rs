//! Data structures for authentication-related requests and responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request payload.
///
/// Fields are optional at the serde level so that a missing field surfaces
/// as a 400 validation error rather than a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Username must be between 1-255 characters"
    ))]
    pub username: Option<String>,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: Option<String>,
}

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: Option<String>,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: Option<String>,
}

/// Response carrying a freshly issued token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
