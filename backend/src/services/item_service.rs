//! Bucket list item business logic service.
//!
//! Every operation first resolves the parent list through
//! `BucketListService::require_owned`, so items under another user's list
//! are reported as missing.

use crate::api::common::{require_field, validate_request};
use crate::api::item::models::{CreateItemRequest, UpdateItemRequest};
use crate::database::models::{BucketListItem, CreateBucketListItem};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::item_repository::ItemRepository;
use crate::services::bucketlist_service::BucketListService;
use sqlx::SqlitePool;

pub struct ItemService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> ItemService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates an item under one of the caller's lists and refreshes the
    /// parent's `date_modified`.
    pub async fn create(
        &self,
        user_id: i64,
        bucketlist_id: i64,
        request: CreateItemRequest,
    ) -> ServiceResult<BucketListItem> {
        validate_request(&request)?;
        let name = require_field(request.name.as_deref(), "name")?;

        let list = BucketListService::new(self.pool)
            .require_owned(user_id, bucketlist_id)
            .await?;

        let item = ItemRepository::new(self.pool)
            .create_item(CreateBucketListItem {
                name: name.to_string(),
                bucketlist_id: list.id,
            })
            .await?;

        tracing::info!(
            "User {} added item {} to bucket list {}",
            user_id,
            item.id,
            list.id
        );
        Ok(item)
    }

    /// Updates an item's `name`/`done` and refreshes both the item's and the
    /// parent's `date_modified`.
    pub async fn update(
        &self,
        user_id: i64,
        bucketlist_id: i64,
        item_id: i64,
        request: UpdateItemRequest,
    ) -> ServiceResult<BucketListItem> {
        validate_request(&request)?;

        let list = BucketListService::new(self.pool)
            .require_owned(user_id, bucketlist_id)
            .await?;

        ItemRepository::new(self.pool)
            .update_item(item_id, list.id, request.name.as_deref(), request.done)
            .await?
            .ok_or_else(|| ServiceError::not_found("Item", item_id.to_string()))
    }

    /// Deletes an item and refreshes the parent's `date_modified`.
    pub async fn delete(
        &self,
        user_id: i64,
        bucketlist_id: i64,
        item_id: i64,
    ) -> ServiceResult<()> {
        let list = BucketListService::new(self.pool)
            .require_owned(user_id, bucketlist_id)
            .await?;

        let deleted = ItemRepository::new(self.pool)
            .delete_item(item_id, list.id)
            .await?;
        if !deleted {
            return Err(ServiceError::not_found("Item", item_id.to_string()));
        }
        Ok(())
    }
}
