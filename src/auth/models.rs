// Authentication data models and DTOs

use crate::validation::validate_username;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// User database model
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User response model (excludes password_hash)
///
/// Serialized camelCase to match the wire format consumed by the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Registration request DTO
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom = "validate_username")]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 128))]
    pub password: String,
}

/// Login request DTO
///
/// No shape validation: a malformed email simply matches no account and
/// falls into the undifferentiated invalid-credentials outcome.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authentication response DTO: user profile plus a bearer token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
}

impl AuthResponse {
    pub fn new(user: UserResponse, access_token: String) -> Self {
        Self {
            user,
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Logout confirmation DTO
///
/// Logout has no server-side effect (tokens are stateless); the endpoint only
/// confirms the caller was authenticated.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

impl Default for LogoutResponse {
    fn default() -> Self {
        Self {
            message: "Successfully logged out".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use validator::Validate;

    fn sample_user() -> User {
        User {
            id: 1,
            username: "alice01".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// The wire representation must never include the password hash
    #[test]
    fn test_user_response_omits_password_hash() {
        let response = UserResponse::from(sample_user());
        let json = serde_json::to_string(&response).expect("Failed to serialize UserResponse");

        assert!(!json.contains("password"));
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"username\":\"alice01\""));
        assert!(json.contains("\"email\":\"a@x.com\""));
        assert!(json.contains("\"isActive\":true"));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_auth_response_carries_bearer_marker() {
        let response = AuthResponse::new(sample_user().into(), "tok".to_string());
        let json = serde_json::to_string(&response).expect("Failed to serialize AuthResponse");

        assert!(json.contains("\"accessToken\":\"tok\""));
        assert!(json.contains("\"tokenType\":\"bearer\""));
    }

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            username: "alice01".to_string(),
            email: "a@x.com".to_string(),
            password: "Secret1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_username = RegisterRequest {
            username: "a!".to_string(),
            ..valid_clone(&valid)
        };
        assert!(bad_username.validate().is_err());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid_clone(&valid)
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "abc".to_string(),
            ..valid_clone(&valid)
        };
        assert!(short_password.validate().is_err());

        let long_password = RegisterRequest {
            password: "x".repeat(129),
            ..valid_clone(&valid)
        };
        assert!(long_password.validate().is_err());
    }

    fn valid_clone(req: &RegisterRequest) -> RegisterRequest {
        RegisterRequest {
            username: req.username.clone(),
            email: req.email.clone(),
            password: req.password.clone(),
        }
    }
}
