//! Event Log API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Event log router (read-only — events are append-only)
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/events", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list))
}
