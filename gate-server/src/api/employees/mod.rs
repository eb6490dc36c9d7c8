//! Employee API Module

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
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
        .route("/{id}/badges", axum::routing::post(handler::add_badge))
        .route("/{id}/badges/{code_hex}", delete(handler::remove_badge))
}
