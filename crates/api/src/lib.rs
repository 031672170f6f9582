//! # Slotbook API
//!
//! The API crate provides the web server for the consultation booking
//! service. It exposes CRUD endpoints for experts, time slots, and bookings,
//! plus shared-secret login endpoints for the admin and expert roles.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like the access gate and
//!   error mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Access gate and error handling middleware
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
///
/// Holds the database pool and the configuration (including the admin and
/// expert shared secrets), loaded once at startup and used read-only for the
/// process lifetime.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Process-wide configuration, including the role secrets
    pub config: config::ApiConfig,
}

/// Starts the API server with the provided configuration and database pool.
///
/// Initializes logging, builds the router, applies CORS and timeout layers,
/// and serves until the process is stopped.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let addr = config.server_addr();
    let cors_origins = config.cors_origins.clone();
    let request_timeout = config.request_timeout;

    // Create shared state with dependencies
    let state = Arc::new(ApiState { db_pool, config });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Expert management endpoints
        .merge(routes::experts::routes())
        // Slot management endpoints
        .merge(routes::slots::routes())
        // Booking endpoints
        .merge(routes::bookings::routes())
        // Admin/expert session endpoints
        .merge(routes::session::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &cors_origins {
        let origins = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect::<Vec<axum::http::HeaderValue>>();
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PATCH,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static("x-admin-token"),
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(request_timeout),
    ));

    // Start the HTTP server
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
