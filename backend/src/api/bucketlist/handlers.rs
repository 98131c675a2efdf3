//! Handler functions for bucket list API endpoints.
//!
//! These functions translate HTTP requests into `BucketListService` calls
//! for the authenticated user and format the JSON responses.

use crate::api::bucketlist::models::{
    BucketListQuery, CreateBucketListRequest, UpdateBucketListRequest,
};
use crate::api::common::{PaginationFilter, service_error_to_http};
use crate::auth::middleware::CurrentUser;
use crate::services::bucketlist_service::BucketListService;
use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
    response::Json as ResponseJson,
};
use serde_json::{Value, json};
use sqlx::SqlitePool;

/// Create a bucket list owned by the caller
#[axum::debug_handler]
pub async fn create_bucketlist(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateBucketListRequest>,
) -> Result<(StatusCode, ResponseJson<Value>), (StatusCode, String)> {
    let service = BucketListService::new(&pool);

    match service.create(user.id, payload).await {
        Ok(list) => Ok((StatusCode::CREATED, ResponseJson(json!({ "bucketlist": list.id })))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// List the caller's bucket lists, with optional name search and pagination
#[axum::debug_handler]
pub async fn get_bucketlists(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<BucketListQuery>,
) -> Result<ResponseJson<Value>, (StatusCode, String)> {
    let service = BucketListService::new(&pool);
    let pagination = PaginationFilter {
        page: query.page,
        limit: query.limit,
    };

    // An empty result set surfaces as NotFound, matching the public contract.
    match service.list(user.id, query.q.as_deref(), &pagination).await {
        Ok(lists) => Ok(ResponseJson(json!({ "bucketlist": lists }))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Fetch a single bucket list (with items) by id
#[axum::debug_handler]
pub async fn get_bucketlist_by_id(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<Value>, (StatusCode, String)> {
    let service = BucketListService::new(&pool);

    match service.get_one(user.id, id).await {
        Ok(list) => Ok(ResponseJson(json!({ "bucketlist": [list] }))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Update a bucket list's name
#[axum::debug_handler]
pub async fn update_bucketlist(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBucketListRequest>,
) -> Result<ResponseJson<Value>, (StatusCode, String)> {
    let service = BucketListService::new(&pool);

    match service.update(user.id, id, payload).await {
        Ok(list) => Ok(ResponseJson(json!({ "bucketlist": list.id }))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Delete a bucket list and all of its items
#[axum::debug_handler]
pub async fn delete_bucketlist(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<Value>, (StatusCode, String)> {
    let service = BucketListService::new(&pool);

    match service.delete(user.id, id).await {
        Ok(count) => Ok(ResponseJson(json!({ "bucketlist": count }))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
