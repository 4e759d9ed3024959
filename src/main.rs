//! OpsDesk Backend
//!
//! REST backend for the company operations application: employees, interns,
//! projects, attendance, leave requests and tasks, with SQLite persistence.

mod api;
mod assignment;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod tenure;
mod timeclock;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OpsDesk Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (OPSDESK_API_PSK). Authentication is disabled!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // API routes
    let api_routes = Router::new()
        // Employees
        .route("/employees", get(api::list_employees))
        .route("/employees", post(api::create_employee))
        .route("/employees/{id}", get(api::get_employee))
        .route("/employees/{id}", put(api::update_employee))
        .route("/employees/{id}", delete(api::delete_employee))
        .route("/employees/{id}/projects", put(api::assign_employee_projects))
        // Interns
        .route("/interns", get(api::list_interns))
        .route("/interns", post(api::create_intern))
        .route("/interns/{id}", get(api::get_intern))
        .route("/interns/{id}", put(api::update_intern))
        .route("/interns/{id}", delete(api::delete_intern))
        .route("/interns/{id}/projects", put(api::assign_intern_projects))
        .route("/interns/{id}/terminate", post(api::terminate_intern))
        // Projects
        .route("/projects", get(api::list_projects))
        .route("/projects", post(api::create_project))
        .route("/projects/{id}", get(api::get_project))
        .route("/projects/{id}", put(api::update_project))
        .route("/projects/{id}", delete(api::delete_project))
        .route("/projects/{id}/team", get(api::get_project_team))
        // Attendance
        .route("/attendance", get(api::list_attendance))
        .route("/attendance/punch-in", post(api::punch_in))
        .route("/attendance/punch-out", post(api::punch_out))
        .route("/attendance/{id}", put(api::update_attendance))
        // Leave requests
        .route("/leave", get(api::list_leave_requests))
        .route("/leave", post(api::create_leave_request))
        .route("/leave/{id}", get(api::get_leave_request))
        .route("/leave/{id}", delete(api::delete_leave_request))
        .route("/leave/{id}/status", put(api::update_leave_status))
        // Tasks
        .route("/tasks", get(api::list_tasks))
        .route("/tasks", post(api::create_task))
        .route("/tasks/{id}", get(api::get_task))
        .route("/tasks/{id}", put(api::update_task))
        .route("/tasks/{id}", delete(api::delete_task))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
