//! Bucket list business logic service.
//!
//! Owns the authorization decision for lists: every operation resolves the
//! list through `require_owned`, so a list belonging to another user is
//! reported as missing rather than forbidden.

use crate::api::bucketlist::models::{CreateBucketListRequest, UpdateBucketListRequest};
use crate::api::common::{PaginationFilter, require_field, validate_request};
use crate::database::models::{BucketList, BucketListWithItems, CreateBucketList};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::bucketlist_repository::BucketListRepository;
use crate::repositories::item_repository::ItemRepository;
use sqlx::SqlitePool;

pub struct BucketListService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> BucketListService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a bucket list owned by the caller.
    pub async fn create(
        &self,
        user_id: i64,
        request: CreateBucketListRequest,
    ) -> ServiceResult<BucketList> {
        validate_request(&request)?;
        let name = require_field(request.name.as_deref(), "name")?;

        let repo = BucketListRepository::new(self.pool);
        let list = repo
            .create_bucketlist(CreateBucketList {
                name: name.to_string(),
                is_public: request.is_public.unwrap_or(false),
                user_id,
            })
            .await?;

        tracing::info!("User {} created bucket list {}", user_id, list.id);
        Ok(list)
    }

    /// Resolves a list the caller owns, or fails with `NotFound`.
    ///
    /// This is the single authorization check for lists and items; a list
    /// owned by someone else is indistinguishable from a missing one.
    pub async fn require_owned(&self, user_id: i64, id: i64) -> ServiceResult<BucketList> {
        BucketListRepository::new(self.pool)
            .get_owned(id, user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("BucketList", id.to_string()))
    }

    /// Retrieves one of the caller's lists with its items.
    pub async fn get_one(&self, user_id: i64, id: i64) -> ServiceResult<BucketListWithItems> {
        let list = self.require_owned(user_id, id).await?;
        let items = ItemRepository::new(self.pool)
            .list_for_bucketlist(list.id)
            .await?;
        Ok(BucketListWithItems::new(list, items))
    }

    /// Retrieves a page of the caller's lists (optionally name-filtered),
    /// each with its items, in creation order.
    ///
    /// # Errors
    /// `NotFound` when the result set is empty, including pages past the
    /// end; the read endpoints surface an empty set as 404.
    pub async fn list(
        &self,
        user_id: i64,
        query: Option<&str>,
        pagination: &PaginationFilter,
    ) -> ServiceResult<Vec<BucketListWithItems>> {
        let repo = BucketListRepository::new(self.pool);
        let item_repo = ItemRepository::new(self.pool);

        let lists = repo.list_owned(user_id, query, pagination).await?;
        if lists.is_empty() {
            return Err(ServiceError::not_found("BucketList", "any"));
        }

        let mut result = Vec::with_capacity(lists.len());
        for list in lists {
            let items = item_repo.list_for_bucketlist(list.id).await?;
            result.push(BucketListWithItems::new(list, items));
        }
        Ok(result)
    }

    /// Updates a list's name (when provided) and refreshes `date_modified`.
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        request: UpdateBucketListRequest,
    ) -> ServiceResult<BucketList> {
        validate_request(&request)?;

        BucketListRepository::new(self.pool)
            .update_bucketlist(id, user_id, request.name.as_deref())
            .await?
            .ok_or_else(|| ServiceError::not_found("BucketList", id.to_string()))
    }

    /// Deletes a list and all its items atomically.
    ///
    /// # Returns
    /// The number of lists deleted
    pub async fn delete(&self, user_id: i64, id: i64) -> ServiceResult<u64> {
        BucketListRepository::new(self.pool)
            .delete_with_items(id, user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("BucketList", id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{seed_user, test_pool};

    fn create_request(name: &str) -> CreateBucketListRequest {
        CreateBucketListRequest {
            name: Some(name.to_string()),
            is_public: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice").await;
        let service = BucketListService::new(&pool);

        let created = service.create(alice, create_request("Travel")).await.unwrap();
        assert!(!created.is_public);

        let fetched = service.get_one(alice, created.id).await.unwrap();
        assert_eq!(fetched.name, "Travel");
        assert_eq!(fetched.date_created, created.date_created);
        assert_eq!(fetched.date_modified, created.date_modified);
        assert!(fetched.items.is_empty());
    }

    #[tokio::test]
    async fn test_other_users_lists_are_invisible() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice").await;
        let bob = seed_user(&pool, "bob").await;
        let service = BucketListService::new(&pool);

        let list = service.create(alice, create_request("Travel")).await.unwrap();

        let err = service.get_one(bob, list.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));

        let err = service
            .update(
                bob,
                list.id,
                UpdateBucketListRequest {
                    name: Some("Stolen".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));

        let err = service.delete(bob, list.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));

        // Alice's list is untouched.
        let fetched = service.get_one(alice, list.id).await.unwrap();
        assert_eq!(fetched.name, "Travel");
    }

    #[tokio::test]
    async fn test_missing_name_rejected() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice").await;
        let service = BucketListService::new(&pool);

        let err = service
            .create(
                alice,
                CreateBucketListRequest {
                    name: None,
                    is_public: Some(true),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_refreshes_date_modified() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice").await;
        let service = BucketListService::new(&pool);

        let created = service.create(alice, create_request("Travel")).await.unwrap();
        let updated = service
            .update(
                alice,
                created.id,
                UpdateBucketListRequest {
                    name: Some("Travel 2026".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Travel 2026");
        assert_eq!(updated.date_created, created.date_created);
        assert!(updated.date_modified >= created.date_modified);

        // Name absent: timestamp still refreshes, name stays.
        let touched = service
            .update(alice, created.id, UpdateBucketListRequest { name: None })
            .await
            .unwrap();
        assert_eq!(touched.name, "Travel 2026");
        assert!(touched.date_modified >= updated.date_modified);
    }

    #[tokio::test]
    async fn test_search_and_pagination() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice").await;
        let service = BucketListService::new(&pool);

        for name in ["Travel", "Books", "Travel gear", "Cooking", "Hiking"] {
            service.create(alice, create_request(name)).await.unwrap();
        }

        let found = service
            .list(alice, Some("Travel"), &PaginationFilter::default())
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|l| l.name.contains("Travel")));

        let page1 = service
            .list(
                alice,
                None,
                &PaginationFilter {
                    page: Some(1),
                    limit: Some(2),
                },
            )
            .await
            .unwrap();
        let page3 = service
            .list(
                alice,
                None,
                &PaginationFilter {
                    page: Some(3),
                    limit: Some(2),
                },
            )
            .await
            .unwrap();
        let beyond = service
            .list(
                alice,
                None,
                &PaginationFilter {
                    page: Some(4),
                    limit: Some(2),
                },
            )
            .await
            .unwrap_err();

        // Creation order, at most `limit` per page, not-found past the end.
        assert_eq!(page1.len(), 2);
        assert_eq!(page1[0].name, "Travel");
        assert_eq!(page1[1].name, "Books");
        assert_eq!(page3.len(), 1);
        assert_eq!(page3[0].name, "Hiking");
        assert!(matches!(beyond, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_result_sets_are_not_found() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice").await;
        let service = BucketListService::new(&pool);

        // No lists at all.
        let err = service
            .list(alice, None, &PaginationFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));

        // A search that matches nothing.
        service.create(alice, create_request("Travel")).await.unwrap();
        let err = service
            .list(alice, Some("Cooking"), &PaginationFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_returns_count() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice").await;
        let service = BucketListService::new(&pool);

        let list = service.create(alice, create_request("Travel")).await.unwrap();
        assert_eq!(service.delete(alice, list.id).await.unwrap(), 1);

        let err = service.get_one(alice, list.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));

        let err = service.delete(alice, list.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
