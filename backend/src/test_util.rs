//! Shared helpers for the inline test suites.

use crate::database::models::CreateUser;
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// In-memory SQLite pool with the schema applied. A single connection keeps
/// every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    sqlx::migrate!().run(&pool).await.expect("migrations");
    pool
}

/// Token utilities with a fixed secret, independent of the environment.
pub fn test_jwt() -> JwtUtils {
    JwtUtils::from_secret("test-secret", 3600)
}

/// Inserts a user directly and returns its id.
pub async fn seed_user(pool: &SqlitePool, username: &str) -> i64 {
    let hash = bcrypt::hash("pw", 4).expect("hash");
    UserRepository::new(pool)
        .create_user(CreateUser {
            username: username.to_string(),
            password_hash: hash,
        })
        .await
        .expect("seed user")
        .id
}
