// Database repository for user accounts

use crate::auth::{error::AuthError, models::User};
use sqlx::PgPool;

const USER_COLUMNS: &str = "id, username, email, password_hash, is_active, created_at, updated_at";

/// User repository for database operations
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    ///
    /// Two concurrent registrations with the same identity can both pass the
    /// service-level pre-checks; the unique constraints are the final
    /// authority, and a violation here is mapped to the same conflict error
    /// a pre-check would have produced. Email uniqueness is enforced on
    /// LOWER(email) (index `users_email_lower_key`), matching the
    /// case-insensitive lookup in `find_by_email`.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AuthError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        ))
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return match db_err.constraint() {
                        Some("users_username_key") => AuthError::UsernameTaken,
                        // users_email_lower_key, or an unnamed duplicate
                        _ => AuthError::EmailTaken,
                    };
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    /// Find a user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE LOWER(email) = LOWER($1)",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// Find a user by username (exact match)
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE username = $1",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }
}
