//! Authentication module for registration, login, and access control.
//!
//! This module provides the public interface for user authentication:
//! registration, login, token issuance, and the middleware protecting the
//! resource routes.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
