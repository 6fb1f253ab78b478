// Bearer-token extractor for protected routes

use crate::auth::{error::AuthError, models::User};
use crate::state::AppState;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::warn;

/// Authenticated user extractor for protected routes
///
/// Pulls the bearer token from the Authorization header and resolves it to an
/// account through the auth service. A missing or malformed header is
/// indistinguishable from an invalid token to the caller.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| {
                warn!("Missing Authorization header on protected endpoint");
                AuthError::Unauthenticated
            })?
            .to_str()
            .map_err(|_| AuthError::Unauthenticated)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::Unauthenticated)?;

        let user = state.auth.resolve_user(token).await?;
        Ok(CurrentUser(user))
    }
}
