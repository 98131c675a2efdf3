//! Core business logic for the authentication system.

use crate::api::common::{require_field, validate_request};
use crate::auth::models::{LoginRequest, RegisterRequest};
use crate::database::models::CreateUser;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use bcrypt::{DEFAULT_COST, hash, verify};
use sqlx::SqlitePool;

/// Authentication service handling registration, login, and token issuance
pub struct AuthService<'a> {
    pool: &'a SqlitePool,
    jwt_utils: JwtUtils,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance with the secret from the environment
    pub fn new(pool: &'a SqlitePool) -> ServiceResult<Self> {
        let jwt_utils = JwtUtils::new()?;
        Ok(Self::with_jwt(pool, jwt_utils))
    }

    /// Create an AuthService instance with explicit token utilities
    pub fn with_jwt(pool: &'a SqlitePool, jwt_utils: JwtUtils) -> Self {
        AuthService { pool, jwt_utils }
    }

    /// Register a new user and issue a token for them.
    ///
    /// # Errors
    /// - `Validation` when username or password is missing or blank
    /// - `AlreadyExists` when the username is taken
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<String> {
        validate_request(&request)?;
        let username = require_field(request.username.as_deref(), "username")?;
        let password = require_field(request.password.as_deref(), "password")?;

        let repo = UserRepository::new(self.pool);
        if repo.username_exists(username).await? {
            return Err(ServiceError::already_exists("User", username));
        }

        let password_hash = Self::hash_password(password)?;
        let user = repo
            .create_user(CreateUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.username, user.id);
        self.jwt_utils.generate_token(user.id)
    }

    /// Authenticate a user by username and password and issue a token.
    ///
    /// # Errors
    /// `Unauthorized` for an unknown username or a password mismatch; the
    /// two cases are not distinguished in the response.
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<String> {
        validate_request(&request)?;
        let username = require_field(request.username.as_deref(), "username")?;
        let password = require_field(request.password.as_deref(), "password")?;

        let repo = UserRepository::new(self.pool);
        let user = repo
            .get_user_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::unauthorized("Invalid username or password"))?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(ServiceError::unauthorized("Invalid username or password"));
        }

        self.jwt_utils.generate_token(user.id)
    }

    /// Hash a password before storing it in the database
    fn hash_password(password: &str) -> ServiceResult<String> {
        hash(password, DEFAULT_COST)
            .map_err(|e| ServiceError::validation(format!("Password hashing failed: {}", e)))
    }

    /// Verify a password against the stored hash
    fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
        verify(password, hash)
            .map_err(|e| ServiceError::validation(format!("Password verification failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{test_jwt, test_pool};

    fn register_request(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let pool = test_pool().await;
        let service = AuthService::with_jwt(&pool, test_jwt());

        let token = service
            .register(register_request("alice", "pw"))
            .await
            .unwrap();
        assert!(!token.is_empty());

        let login_token = service.login(login_request("alice", "pw")).await.unwrap();
        let claims = test_jwt().validate_token(&login_token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let pool = test_pool().await;
        let service = AuthService::with_jwt(&pool, test_jwt());

        service
            .register(register_request("alice", "pw"))
            .await
            .unwrap();

        let err = service
            .register(register_request("alice", "other"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists { .. }));

        // First user's credentials still work.
        service.login(login_request("alice", "pw")).await.unwrap();
    }

    #[tokio::test]
    async fn test_login_failures_are_unauthorized() {
        let pool = test_pool().await;
        let service = AuthService::with_jwt(&pool, test_jwt());

        service
            .register(register_request("alice", "pw"))
            .await
            .unwrap();

        let err = service
            .login(login_request("alice", "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized { .. }));

        let err = service
            .login(login_request("nobody", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_missing_fields_are_validation_errors() {
        let pool = test_pool().await;
        let service = AuthService::with_jwt(&pool, test_jwt());

        let err = service
            .register(RegisterRequest {
                username: Some("alice".to_string()),
                password: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));

        let err = service
            .login(LoginRequest {
                username: None,
                password: Some("pw".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }
}
