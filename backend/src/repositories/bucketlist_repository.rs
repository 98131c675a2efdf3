//! Database repository for bucket list operations.
//!
//! All reads and writes are scoped to the owning user; a list that exists
//! but belongs to someone else is indistinguishable from a missing one.

use crate::api::common::PaginationFilter;
use crate::database::models::{BucketList, CreateBucketList};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Repository for bucket list database operations.
pub struct BucketListRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> BucketListRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new bucket list owned by the given user.
    pub async fn create_bucketlist(&self, list: CreateBucketList) -> Result<BucketList> {
        let now = Utc::now();
        let list = sqlx::query_as::<_, BucketList>(
            r#"
            INSERT INTO bucketlists (name, is_public, user_id, date_created, date_modified)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, is_public, user_id, date_created, date_modified
            "#,
        )
        .bind(&list.name)
        .bind(list.is_public)
        .bind(list.user_id)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(list)
    }

    /// Retrieves a bucket list by id, scoped to its owner.
    ///
    /// # Returns
    /// `Some(BucketList)` only when the list exists and belongs to `user_id`
    pub async fn get_owned(&self, id: i64, user_id: i64) -> Result<Option<BucketList>> {
        let list = sqlx::query_as::<_, BucketList>(
            r#"
            SELECT id, name, is_public, user_id, date_created, date_modified
            FROM bucketlists WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(list)
    }

    /// Retrieves a page of the user's bucket lists, optionally filtered by a
    /// substring match on the name, in creation order.
    pub async fn list_owned(
        &self,
        user_id: i64,
        query: Option<&str>,
        pagination: &PaginationFilter,
    ) -> Result<Vec<BucketList>> {
        let limit = pagination.limit() as i64;
        let offset = pagination.offset() as i64;
        let pattern = query.map(|q| format!("%{}%", q));

        let lists = sqlx::query_as::<_, BucketList>(
            r#"
            SELECT id, name, is_public, user_id, date_created, date_modified
            FROM bucketlists
            WHERE user_id = ? AND (? IS NULL OR name LIKE ?)
            ORDER BY date_created ASC, id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(&pattern)
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(lists)
    }

    /// Updates a bucket list's name (when provided) and refreshes its
    /// `date_modified`, scoped to the owner.
    ///
    /// # Returns
    /// The updated list, or `None` if it does not exist for this user
    pub async fn update_bucketlist(
        &self,
        id: i64,
        user_id: i64,
        name: Option<&str>,
    ) -> Result<Option<BucketList>> {
        let now = Utc::now();
        let list = sqlx::query_as::<_, BucketList>(
            r#"
            UPDATE bucketlists
            SET name = COALESCE(?, name), date_modified = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, name, is_public, user_id, date_created, date_modified
            "#,
        )
        .bind(name)
        .bind(now)
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(list)
    }

    /// Deletes a bucket list and all of its items in one transaction.
    ///
    /// # Returns
    /// The number of lists deleted (`Some(1)`), or `None` if the list does
    /// not exist for this user. Either the list and every child item are
    /// removed, or nothing is.
    pub async fn delete_with_items(&self, id: i64, user_id: i64) -> Result<Option<u64>> {
        let mut tx = self.pool.begin().await?;

        // Ownership check inside the transaction so the item delete below
        // can never touch another user's rows.
        let owned: Option<i64> =
            sqlx::query_scalar("SELECT id FROM bucketlists WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;

        if owned.is_none() {
            return Ok(None);
        }

        sqlx::query("DELETE FROM bucketlist_items WHERE bucketlist_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM bucketlists WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(Some(deleted))
    }

    /// Refreshes a list's `date_modified` through an existing transaction.
    pub async fn touch(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        id: i64,
        now: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query("UPDATE bucketlists SET date_modified = ? WHERE id = ?")
            .bind(now)
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
