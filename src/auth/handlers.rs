// HTTP handlers for authentication endpoints

use crate::auth::{
    error::AuthError,
    middleware::CurrentUser,
    models::{AuthResponse, LoginRequest, LogoutResponse, RegisterRequest, UserResponse},
};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// Register a new user
/// POST /api/auth/register
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    tracing::debug!("Registration attempt for username: {}", request.username);
    let response = state.auth.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login a user
/// POST /api/auth/login
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let response = state.auth.login(request).await?;
    Ok(Json(response))
}

/// Logout (protected)
/// POST /api/auth/logout
///
/// Tokens are stateless, so there is nothing to revoke server-side; the
/// endpoint confirms the caller is authenticated and the client discards its
/// token copy.
pub async fn logout_handler(
    CurrentUser(user): CurrentUser,
) -> Result<Json<LogoutResponse>, AuthError> {
    tracing::debug!("User {} logged out", user.id);
    Ok(Json(LogoutResponse::default()))
}

/// Get current user information (protected)
/// GET /api/auth/user
pub async fn current_user_handler(
    CurrentUser(user): CurrentUser,
) -> Result<Json<UserResponse>, AuthError> {
    Ok(Json(user.into()))
}
