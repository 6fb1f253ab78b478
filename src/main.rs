mod auth;
mod config;
mod db;
mod state;
mod validation;

use axum::{
    http::HeaderValue,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use auth::repository::UserRepository;
use auth::token::TokenService;
use auth::{current_user_handler, login_handler, logout_handler, register_handler, AuthService};
use config::Config;
use state::AppState;

/// Handler for GET /
/// Root path - API health banner
async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Member System API is running",
    }))
}

/// Handler for GET /health
/// Health check endpoint
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
    }))
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    // Allow only the configured frontend origins
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/user", get(current_user_handler))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Member System API - Starting...");

    // Load immutable process configuration
    let config = Config::from_env().expect("Failed to load configuration");

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    // Wire up the auth service
    let token_service = TokenService::new(&config);
    let user_repo = UserRepository::new(db_pool);
    let auth_service = AuthService::new(user_repo, token_service);
    let state = AppState::new(auth_service);

    // Create the application router
    let app = create_router(state, &config.cors_origins);

    // Start the Axum server
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Member System API is running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
