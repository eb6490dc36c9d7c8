//! Admin API routes
//!
//! # Structure
//!
//! - [`employees`] — employee and badge management
//! - [`accesses`] — access policy and badge authorization management
//! - [`events`] — authorization event log
//! - [`health`] — health check

pub mod accesses;
pub mod employees;
pub mod events;
pub mod health;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(employees::router())
        .merge(accesses::router())
        .merge(events::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - the admin console frontend runs on its own origin
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
