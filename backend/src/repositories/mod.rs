//! Database repositories, one per entity.
//!
//! Repositories own all SQL and the transaction boundaries for multi-step
//! mutations. Ownership scoping lives here: every query issued on behalf of
//! an authenticated user filters by that user's id.

pub mod bucketlist_repository;
pub mod item_repository;
pub mod user_repository;
