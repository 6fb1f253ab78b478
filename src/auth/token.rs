// JWT token generation and validation service

use crate::auth::error::AuthError;
use crate::config::Config;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
///
/// `sub` carries the account id as a string; `exp` and `iat` are UTC Unix
/// timestamps. The signature covers both, so tampering with either
/// invalidates the token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token service for stateless session tokens
///
/// Tokens are self-contained: validity is determined entirely by the
/// signature and the embedded expiry. Revocation before natural expiry is
/// not supported.
pub struct TokenService {
    secret: String,
    algorithm: Algorithm,
    expire_minutes: i64,
}

impl TokenService {
    /// Create a new TokenService from the process configuration
    pub fn new(config: &Config) -> Self {
        Self {
            secret: config.secret_key.clone(),
            algorithm: config.algorithm,
            expire_minutes: config.access_token_expire_minutes,
        }
    }

    /// Generate a signed token for the given account id using the configured
    /// default lifetime
    pub fn generate_token(&self, user_id: i32) -> Result<String, AuthError> {
        self.generate_token_with_ttl(user_id, self.expire_minutes * 60)
    }

    /// Generate a signed token with an explicit lifetime in seconds
    pub fn generate_token_with_ttl(
        &self,
        user_id: i32,
        ttl_seconds: i64,
    ) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + ttl_seconds,
        };

        encode(
            &Header::new(self.algorithm),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Decode and verify a token, returning its claims
    ///
    /// Bad signature, wrong algorithm, garbage input, and expiry all collapse
    /// into the single `Unauthenticated` outcome so callers learn nothing
    /// about why a token was rejected.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Helper to create a test token service
    fn test_token_service() -> TokenService {
        TokenService {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            algorithm: Algorithm::HS256,
            expire_minutes: 1440,
        }
    }

    #[test]
    fn test_token_carries_subject_and_default_expiry() {
        let service = test_token_service();
        let token = service.generate_token(42).unwrap();
        let claims = service.decode_token(&token).unwrap();

        assert_eq!(claims.sub, "42");
        // Default lifetime is 1440 minutes
        assert_eq!(claims.exp - claims.iat, 1440 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = test_token_service();
        let token = service.generate_token_with_ttl(1, -500).unwrap();

        let result = service.decode_token(&token);
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        for bad in [
            "",
            "not.a.token",
            "invalid_token_format",
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature",
        ] {
            assert!(service.decode_token(bad).is_err(), "'{}' should fail", bad);
        }
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let service = test_token_service();
        let token = service.generate_token(7).unwrap();

        // Flip the last character of the signature segment
        let mut chars: Vec<char> = token.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();

        assert!(service.decode_token(&token).is_ok());
        assert!(service.decode_token(&tampered).is_err());
    }

    #[test]
    fn test_token_from_different_secret_is_rejected() {
        let service1 = test_token_service();
        let service2 = TokenService {
            secret: "another_secret_entirely".to_string(),
            algorithm: Algorithm::HS256,
            expire_minutes: 1440,
        };

        let token = service1.generate_token(1).unwrap();
        assert!(service1.decode_token(&token).is_ok());
        assert!(service2.decode_token(&token).is_err());
    }

    proptest! {
        #[test]
        fn prop_roundtrip_preserves_subject(user_id in 1i32..1000000) {
            let service = test_token_service();
            let token = service.generate_token(user_id)?;
            let claims = service.decode_token(&token)?;
            prop_assert_eq!(claims.sub, user_id.to_string());
        }

        #[test]
        fn prop_random_strings_are_rejected(garbage in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.decode_token(&garbage).is_err());
        }
    }
}
