//! Handler functions for bucket list item API endpoints.
//!
//! These functions translate HTTP requests into `ItemService` calls for the
//! authenticated user and format the JSON responses.

use crate::api::common::service_error_to_http;
use crate::api::item::models::{CreateItemRequest, UpdateItemRequest};
use crate::auth::middleware::CurrentUser;
use crate::services::item_service::ItemService;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};
use serde_json::{Value, json};
use sqlx::SqlitePool;

/// Add an item to one of the caller's bucket lists
#[axum::debug_handler]
pub async fn create_item(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateItemRequest>,
) -> Result<(StatusCode, ResponseJson<Value>), (StatusCode, String)> {
    let service = ItemService::new(&pool);

    match service.create(user.id, id, payload).await {
        Ok(item) => Ok((StatusCode::CREATED, ResponseJson(json!({ "item": item.id })))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Update an item's name or completion flag
#[axum::debug_handler]
pub async fn update_item(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<CurrentUser>,
    Path((id, item_id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<ResponseJson<Value>, (StatusCode, String)> {
    let service = ItemService::new(&pool);

    match service.update(user.id, id, item_id, payload).await {
        Ok(item) => Ok(ResponseJson(json!({ "item": item.id }))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Delete an item from one of the caller's bucket lists
#[axum::debug_handler]
pub async fn delete_item(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<CurrentUser>,
    Path((id, item_id)): Path<(i64, i64)>,
) -> Result<ResponseJson<Value>, (StatusCode, String)> {
    let service = ItemService::new(&pool);

    match service.delete(user.id, id, item_id).await {
        Ok(()) => Ok(ResponseJson(json!({ "item": item_id }))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
