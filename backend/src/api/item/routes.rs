//! Defines the HTTP routes for bucket list item management.
//!
//! Nested under `/bucketlists` alongside the list routes; all routes
//! require a valid token.

use super::handlers::{create_item, delete_item, update_item};
use crate::auth::middleware::token_auth;
use axum::{Router, middleware, routing::post, routing::put};

pub fn item_router() -> Router {
    Router::new()
        .route("/{id}/items", post(create_item))
        .route("/{id}/items/{item_id}", put(update_item).delete(delete_item))
        .route_layer(middleware::from_fn(token_auth))
}
