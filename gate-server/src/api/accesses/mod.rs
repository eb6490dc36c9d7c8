//! Access Policy API Module

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

/// Access policy router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/accesses", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/badges", post(handler::grant_badge))
        .route("/{id}/badges/{code_hex}", delete(handler::revoke_badge))
}
