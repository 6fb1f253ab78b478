// Authentication service - business logic layer

use crate::auth::{
    error::AuthError,
    models::{AuthResponse, LoginRequest, RegisterRequest, User},
    password::PasswordService,
    repository::UserRepository,
    token::TokenService,
};
use validator::Validate;

/// Authentication service coordinating registration, login, and session
/// resolution
pub struct AuthService {
    user_repo: UserRepository,
    token_service: TokenService,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(user_repo: UserRepository, token_service: TokenService) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// Register a new user
    ///
    /// Checks email before username so the email conflict wins when a request
    /// collides on both. The pre-checks are advisory; the unique constraints
    /// in the store settle concurrent registrations (see repository).
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            tracing::debug!("Registration rejected, email already taken");
            return Err(AuthError::EmailTaken);
        }

        if self
            .user_repo
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            tracing::debug!("Registration rejected, username already taken");
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = PasswordService::hash_password(&request.password)?;

        let user = self
            .user_repo
            .create_user(&request.username, &request.email, &password_hash)
            .await?;

        tracing::info!("Registered new user with id: {}", user.id);

        let token = self.token_service.generate_token(user.id)?;
        Ok(AuthResponse::new(user.into(), token))
    }

    /// Login a user
    ///
    /// An unknown email and a wrong password produce the identical
    /// `InvalidCredentials` outcome. A disabled account is reported
    /// distinctly, but only after the password has been verified, so the
    /// distinction is not a credential-guessing oracle.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        let user = self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify_password(&request.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AuthError::AccountDisabled);
        }

        tracing::info!("User {} logged in", user.id);

        let token = self.token_service.generate_token(user.id)?;
        Ok(AuthResponse::new(user.into(), token))
    }

    /// Resolve a bearer token into the account it asserts
    ///
    /// Invalid signature, expiry, a malformed subject, and a vanished account
    /// all collapse into `Unauthenticated`.
    pub async fn resolve_user(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.token_service.decode_token(token)?;

        let user_id: i32 = claims
            .sub
            .parse()
            .map_err(|_| AuthError::Unauthenticated)?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::Unauthenticated)
    }
}
