//! Middleware for protecting authenticated routes.
//!
//! Validates the caller's token and attaches the authenticated user to the
//! request before any handler runs. The token travels either as the username
//! slot of HTTP Basic credentials (the password slot is ignored) or as a
//! Bearer token.

use crate::api::common::ErrorResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::{Extension, Request},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use base64::{Engine as _, engine::general_purpose};
use sqlx::SqlitePool;

/// The authenticated caller, attached to request extensions by `token_auth`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

/// Token authentication middleware
pub async fn token_auth(
    Extension(pool): Extension<SqlitePool>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| unauthorized("Missing credentials"))?;

    let token =
        extract_token(auth_header).ok_or_else(|| unauthorized("Malformed credentials"))?;

    let jwt_utils = JwtUtils::new().map_err(|e| {
        tracing::error!("Token utilities unavailable: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::to_string(&ErrorResponse::new("Internal server error", "internal_error"))
                .unwrap(),
        )
    })?;

    let claims = jwt_utils
        .validate_token(&token)
        .map_err(|_| unauthorized("Invalid or expired token"))?;
    let user_id = claims
        .user_id()
        .map_err(|_| unauthorized("Invalid or expired token"))?;

    // The token may outlive the account it was issued for.
    let user = UserRepository::new(&pool)
        .get_user_by_id(user_id)
        .await
        .map_err(|e| {
            tracing::error!("User lookup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::to_string(&ErrorResponse::new(
                    "Internal server error",
                    "internal_error",
                ))
                .unwrap(),
            )
        })?
        .ok_or_else(|| unauthorized("Invalid or expired token"))?;

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        username: user.username,
    });
    Ok(next.run(request).await)
}

/// Pulls the token out of an Authorization header value.
///
/// `Basic` credentials carry the token in the username slot; `Bearer`
/// credentials carry it directly.
fn extract_token(auth_header: &str) -> Option<String> {
    if let Some(encoded) = auth_header.strip_prefix("Basic ") {
        let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
        let credentials = String::from_utf8(decoded).ok()?;
        let token = match credentials.split_once(':') {
            Some((username, _password)) => username,
            None => credentials.as_str(),
        };
        if token.is_empty() {
            return None;
        }
        return Some(token.to_string());
    }

    if let Some(token) = auth_header.strip_prefix("Bearer ") {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        return Some(token.to_string());
    }

    None
}

fn unauthorized(message: &str) -> (StatusCode, String) {
    (
        StatusCode::UNAUTHORIZED,
        serde_json::to_string(&ErrorResponse::new(message, "unauthorized")).unwrap(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(credentials: &str) -> String {
        format!("Basic {}", general_purpose::STANDARD.encode(credentials))
    }

    #[test]
    fn test_extract_token_from_basic_username_slot() {
        assert_eq!(
            extract_token(&basic("some-token:ignored")),
            Some("some-token".to_string())
        );
        // Password slot empty or absent is fine.
        assert_eq!(
            extract_token(&basic("some-token:")),
            Some("some-token".to_string())
        );
        assert_eq!(
            extract_token(&basic("some-token")),
            Some("some-token".to_string())
        );
    }

    #[test]
    fn test_extract_token_from_bearer() {
        assert_eq!(
            extract_token("Bearer some-token"),
            Some("some-token".to_string())
        );
    }

    #[test]
    fn test_extract_token_rejects_garbage() {
        assert_eq!(extract_token("Basic not!base64"), None);
        assert_eq!(extract_token(&basic(":pw-only")), None);
        assert_eq!(extract_token("Bearer "), None);
        assert_eq!(extract_token("Digest abc"), None);
        assert_eq!(extract_token(""), None);
    }
}
