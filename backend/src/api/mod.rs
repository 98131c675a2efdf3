//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the resource routers,
//! excluding core authentication routes which are handled separately.

pub mod bucketlist;
pub mod common;
pub mod item;
