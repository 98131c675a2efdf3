//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for registration and
//! login, parse request data, and interact with the `auth::service` for the
//! core business logic.

use crate::api::common::service_error_to_http;
use crate::auth::models::{LoginRequest, RegisterRequest, TokenResponse};
use crate::auth::service::AuthService;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Handle user registration request
#[axum::debug_handler]
pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, ResponseJson<TokenResponse>), (StatusCode, String)> {
    let auth_service = AuthService::new(&pool).map_err(service_error_to_http)?;

    match auth_service.register(payload).await {
        Ok(token) => Ok((StatusCode::CREATED, ResponseJson(TokenResponse { token }))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<TokenResponse>, (StatusCode, String)> {
    let auth_service = AuthService::new(&pool).map_err(service_error_to_http)?;

    match auth_service.login(payload).await {
        Ok(token) => Ok(ResponseJson(TokenResponse { token })),
        Err(error) => Err(service_error_to_http(error)),
    }
}
