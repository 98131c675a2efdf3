//! Database repository for bucket list item operations.
//!
//! Item mutations always run in a transaction that also refreshes the parent
//! list's `date_modified`, with one timestamp shared by both rows.

use crate::database::models::{BucketListItem, CreateBucketListItem};
use crate::repositories::bucketlist_repository::BucketListRepository;
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for bucket list item database operations.
pub struct ItemRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> ItemRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Retrieves all items belonging to a bucket list, in creation order.
    pub async fn list_for_bucketlist(&self, bucketlist_id: i64) -> Result<Vec<BucketListItem>> {
        let items = sqlx::query_as::<_, BucketListItem>(
            r#"
            SELECT id, name, done, bucketlist_id, date_created, date_modified
            FROM bucketlist_items
            WHERE bucketlist_id = ?
            ORDER BY date_created ASC, id ASC
            "#,
        )
        .bind(bucketlist_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Inserts an item and refreshes the parent list's `date_modified` in
    /// one transaction.
    pub async fn create_item(&self, item: CreateBucketListItem) -> Result<BucketListItem> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, BucketListItem>(
            r#"
            INSERT INTO bucketlist_items (name, done, bucketlist_id, date_created, date_modified)
            VALUES (?, 0, ?, ?, ?)
            RETURNING id, name, done, bucketlist_id, date_created, date_modified
            "#,
        )
        .bind(&item.name)
        .bind(item.bucketlist_id)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        BucketListRepository::touch(&mut tx, item.bucketlist_id, now).await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Updates an item's `name`/`done` (when provided) and refreshes both the
    /// item's and the parent list's `date_modified` in one transaction.
    ///
    /// # Returns
    /// The updated item, or `None` if no such item exists under that list
    pub async fn update_item(
        &self,
        item_id: i64,
        bucketlist_id: i64,
        name: Option<&str>,
        done: Option<bool>,
    ) -> Result<Option<BucketListItem>> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, BucketListItem>(
            r#"
            UPDATE bucketlist_items
            SET name = COALESCE(?, name), done = COALESCE(?, done), date_modified = ?
            WHERE id = ? AND bucketlist_id = ?
            RETURNING id, name, done, bucketlist_id, date_created, date_modified
            "#,
        )
        .bind(name)
        .bind(done)
        .bind(now)
        .bind(item_id)
        .bind(bucketlist_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(updated) = updated else {
            return Ok(None);
        };

        BucketListRepository::touch(&mut tx, bucketlist_id, now).await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Deletes an item and refreshes the parent list's `date_modified` in
    /// one transaction.
    ///
    /// # Returns
    /// `true` if the item existed under that list and was deleted
    pub async fn delete_item(&self, item_id: i64, bucketlist_id: i64) -> Result<bool> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query(
            "DELETE FROM bucketlist_items WHERE id = ? AND bucketlist_id = ?",
        )
        .bind(item_id)
        .bind(bucketlist_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if deleted == 0 {
            return Ok(false);
        }

        BucketListRepository::touch(&mut tx, bucketlist_id, now).await?;

        tx.commit().await?;
        Ok(true)
    }
}
