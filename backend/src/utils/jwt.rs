//! JWT token utilities for authentication.
//!
//! Provides secure token creation, validation, and claims management. Tokens
//! are HS256-signed and carry the owning user's id in the `sub` claim.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::ServiceError;

/// JWT claims carried by every issued token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, ServiceError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| ServiceError::unauthorized("Malformed token subject"))
    }
}

/// JWT token utility for creating and validating tokens
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance with the secret from the environment
    pub fn new() -> Result<Self, ServiceError> {
        let config = Config::from_env()
            .map_err(|e| ServiceError::validation(format!("Config error: {}", e)))?;

        Ok(Self::from_secret(
            &config.jwt_secret,
            config.jwt_expires_in_seconds,
        ))
    }

    /// Create a JwtUtils instance from an explicit secret
    pub fn from_secret(secret: &str, expires_in_seconds: u64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds,
        }
    }

    /// Generate a new signed token for a user
    pub fn generate_token(&self, user_id: i64) -> Result<String, ServiceError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_seconds as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::validation(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a token. Fails on bad signature, malformed input,
    /// or expiry.
    pub fn validate_token(&self, token: &str) -> Result<Claims, ServiceError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| ServiceError::unauthorized("Invalid or expired token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let jwt = JwtUtils::from_secret("test-secret", 3600);

        let token = jwt.generate_token(42).unwrap();
        let claims = jwt.validate_token(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id().unwrap(), 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let jwt = JwtUtils::from_secret("test-secret", 3600);
        let other = JwtUtils::from_secret("other-secret", 3600);

        let token = jwt.generate_token(1).unwrap();
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let jwt = JwtUtils::from_secret("test-secret", 3600);
        assert!(jwt.validate_token("not-a-token").is_err());
        assert!(jwt.validate_token("").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // jsonwebtoken applies default leeway of 60s, so back-date well past it.
        let jwt = JwtUtils::from_secret("test-secret", 3600);
        let now = Utc::now();
        let claims = Claims {
            sub: "7".to_string(),
            exp: (now - Duration::seconds(120)).timestamp() as usize,
            iat: (now - Duration::seconds(3600)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(jwt.validate_token(&token).is_err());
    }
}
