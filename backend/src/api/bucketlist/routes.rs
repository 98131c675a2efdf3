//! Defines the HTTP routes for bucket list management.
//!
//! All routes require a valid token; the auth middleware attaches the
//! calling user before any handler runs.

use super::handlers::{
    create_bucketlist, delete_bucketlist, get_bucketlist_by_id, get_bucketlists,
    update_bucketlist,
};
use crate::auth::middleware::token_auth;
use axum::{Router, middleware, routing::get, routing::post};

pub fn bucketlist_router() -> Router {
    Router::new()
        .route("/", post(create_bucketlist).get(get_bucketlists))
        .route(
            "/{id}",
            get(get_bucketlist_by_id)
                .put(update_bucketlist)
                .delete(delete_bucketlist),
        )
        .route_layer(middleware::from_fn(token_auth))
}
