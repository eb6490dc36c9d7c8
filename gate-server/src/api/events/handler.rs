//! Event Log API Handlers

use axum::{
    Json,
    extract::{Query, State},
};

use shared::models::{EventListResponse, EventQuery};

use crate::core::ServerState;
use crate::db::repository::event;
use crate::utils::AppResult;

/// GET /api/events — page through authorization events, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EventQuery>,
) -> AppResult<Json<EventListResponse>> {
    let (items, total) = event::find_page(&state.pool, &query).await?;
    Ok(Json(EventListResponse { items, total }))
}
