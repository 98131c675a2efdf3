//! Module for core business logic services.
//!
//! Services validate input, enforce ownership, and orchestrate the
//! repositories. All authorization decisions funnel through
//! `BucketListService::require_owned`.

pub mod bucketlist_service;
pub mod item_service;
