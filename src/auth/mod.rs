// Authentication module
// Provides JWT-based authentication with user registration, login, logout,
// and current-user lookup over stateless bearer tokens

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{current_user_handler, login_handler, logout_handler, register_handler};
pub use middleware::CurrentUser;
pub use models::{AuthResponse, LoginRequest, LogoutResponse, RegisterRequest, User, UserResponse};
pub use service::AuthService;
