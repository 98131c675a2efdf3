//! Bucket list item resource endpoints.

pub mod handlers;
pub mod models;
pub mod routes;
