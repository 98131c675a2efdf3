//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    // Never leaves the server.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateUser {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Username must be between 1-255 characters"
    ))]
    pub username: String,

    #[validate(length(min = 1, message = "Password hash is required"))]
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BucketList {
    pub id: i64,
    pub name: String,
    pub is_public: bool,
    pub user_id: i64,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateBucketList {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1-255 characters"))]
    pub name: String,
    pub is_public: bool,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BucketListItem {
    pub id: i64,
    pub name: String,
    pub done: bool,
    pub bucketlist_id: i64,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateBucketListItem {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1-255 characters"))]
    pub name: String,
    pub bucketlist_id: i64,
}

/// A bucket list together with its items, as returned by the read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketListWithItems {
    pub id: i64,
    pub name: String,
    pub is_public: bool,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub items: Vec<BucketListItem>,
}

impl BucketListWithItems {
    pub fn new(list: BucketList, items: Vec<BucketListItem>) -> Self {
        Self {
            id: list.id,
            name: list.name,
            is_public: list.is_public,
            date_created: list.date_created,
            date_modified: list.date_modified,
            items,
        }
    }
}
