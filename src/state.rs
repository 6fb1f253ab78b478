// Shared application state passed to every handler

use crate::auth::service::AuthService;
use std::sync::Arc;

/// Application state shared across handlers
///
/// Holds the auth service (which owns the repository and token codec); no
/// other in-process mutable state exists, so per-request consistency is
/// delegated entirely to the database.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}
