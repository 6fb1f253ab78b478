// Authentication error types and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::{error, warn};

/// Authentication error taxonomy
///
/// The service and the session resolver are the only layers that construct
/// these; lower-level failures (constraint violations, hashing errors, token
/// encoding errors) are mapped into them and never leaked raw to the caller.
#[derive(Debug)]
pub enum AuthError {
    /// Malformed input shape (username charset, email syntax, password bounds)
    ValidationError(String),
    /// Registration conflict: email already registered
    EmailTaken,
    /// Registration conflict: username already in use
    UsernameTaken,
    /// Login failure; intentionally does not distinguish unknown email from
    /// wrong password
    InvalidCredentials,
    /// Correct credentials but the account has been deactivated
    AccountDisabled,
    /// Missing, malformed, or expired token, or a token whose subject no
    /// longer exists
    Unauthenticated,
    /// Store failure surfaced as a generic 500
    DatabaseError(String),
    /// Password hashing failure surfaced as a generic 500
    PasswordHashError,
    /// Token signing failure surfaced as a generic 500
    TokenGenerationError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AuthError::EmailTaken => write!(f, "Email already registered"),
            AuthError::UsernameTaken => write!(f, "Username already in use"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::AccountDisabled => write!(f, "Account has been disabled"),
            AuthError::Unauthenticated => write!(f, "Invalid authentication credentials"),
            AuthError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AuthError::PasswordHashError => write!(f, "Password hashing error"),
            AuthError::TokenGenerationError(msg) => write!(f, "Token generation error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AuthError::EmailTaken => StatusCode::BAD_REQUEST,
            AuthError::UsernameTaken => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::AccountDisabled => StatusCode::FORBIDDEN,
            AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::PasswordHashError => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::TokenGenerationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a descriptive error message for this error
    /// This message is safe to send to clients (no sensitive data)
    pub fn error_message(&self) -> String {
        match self {
            AuthError::ValidationError(msg) => msg.clone(),
            AuthError::EmailTaken => "Email already registered".to_string(),
            AuthError::UsernameTaken => "Username already in use".to_string(),
            AuthError::InvalidCredentials => "Invalid email or password".to_string(),
            AuthError::AccountDisabled => "Account has been disabled".to_string(),
            AuthError::Unauthenticated => "Invalid authentication credentials".to_string(),
            AuthError::DatabaseError(_) => "Internal server error".to_string(),
            AuthError::PasswordHashError => "Internal server error".to_string(),
            AuthError::TokenGenerationError(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::Unauthenticated => {
                warn!("Rejected unauthenticated request");
            }
            AuthError::AccountDisabled => {
                warn!("Login attempt on disabled account");
            }
            AuthError::DatabaseError(msg) => {
                error!("Database error in auth: {}", msg);
            }
            AuthError::PasswordHashError => {
                error!("Password hashing error");
            }
            AuthError::TokenGenerationError(msg) => {
                error!("Token generation error: {}", msg);
            }
            _ => {}
        }

        let status = self.status_code();
        let body = Json(json!({
            "error": self.error_message(),
        }));

        (status, body).into_response()
    }
}

/// Convert validator errors into a 400 with a flat, human-readable message
impl From<validator::ValidationErrors> for AuthError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();
        AuthError::ValidationError(format!("Invalid value for: {}", fields.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_match_taxonomy() {
        assert_eq!(
            AuthError::ValidationError("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::UsernameTaken.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::AccountDisabled.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::DatabaseError("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    /// Internal detail must never reach the client-facing message
    #[test]
    fn test_internal_errors_produce_generic_messages() {
        let err = AuthError::DatabaseError("SELECT failed: relation users".into());
        assert_eq!(err.error_message(), "Internal server error");

        let err = AuthError::TokenGenerationError("bad key".into());
        assert_eq!(err.error_message(), "Internal server error");
    }
}
