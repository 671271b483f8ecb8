//! Main entry point for the Cookbook backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection and schema, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall
//! structure. Startup failures (missing configuration, unreachable
//! database, schema creation) are fatal; there is no degraded mode.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod state;

use std::time::Duration;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    middleware::from_fn_with_state,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{signal, SignalKind},
    },
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::api::meal::routes::meal_router;
use crate::api::user::routes::user_router;
use crate::auth::middleware::require_auth;
use crate::auth::routes::auth_router;
use crate::config::Config;
use crate::state::AppState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // A missing .env file is fine; the environment may be set directly.
    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Failed to load configuration");

    let pool = database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    database::create_tables(&pool)
        .await
        .expect("Failed to create database tables");

    let port = config.port;
    let state = AppState::new(config, pool);
    let app = app(state);

    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind listen address");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Assemble the full router. The protected subtree is only reachable through
/// the auth middleware; the set of protected routes is fixed here, not
/// computed per request.
fn app(state: AppState) -> Router {
    let protected = Router::new()
        .merge(user_router())
        .nest("/meals", meal_router())
        .layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_router())
        .nest("/api", protected)
        .layer(cors_layer(&state))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
