//! Access Policy API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{AccessBadge, AccessCreate, AccessUpdate, AccessWithBadges, BadgeGrant};

use crate::core::ServerState;
use crate::db::repository::access;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_badge_hex, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// List all access policies with their authorized badges
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<AccessWithBadges>>> {
    let accesses = access::find_all(&state.pool).await?;
    Ok(Json(accesses))
}

/// Get access policy by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AccessWithBadges>> {
    let access = access::find_with_badges(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Access policy {id} not found")))?;
    Ok(Json(access))
}

/// Create a new access policy
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AccessCreate>,
) -> AppResult<Json<AccessWithBadges>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let access = access::create(&state.pool, payload).await?;
    Ok(Json(access))
}

/// Update an access policy
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<AccessUpdate>,
) -> AppResult<Json<AccessWithBadges>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;

    let access = access::update(&state.pool, id, payload).await?;
    Ok(Json(access))
}

/// Delete an access policy (its badge grants cascade)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = access::delete(&state.pool, id).await?;
    Ok(Json(result))
}

/// Authorize a badge on a policy
pub async fn grant_badge(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BadgeGrant>,
) -> AppResult<Json<AccessBadge>> {
    let code_hex = validate_badge_hex(&payload.code_hex)?;
    let grant = access::grant_badge(&state.pool, id, &code_hex).await?;
    Ok(Json(grant))
}

/// Revoke a badge from a policy
pub async fn revoke_badge(
    State(state): State<ServerState>,
    Path((id, code_hex)): Path<(i64, String)>,
) -> AppResult<Json<bool>> {
    let code_hex = validate_badge_hex(&code_hex)?;
    let result = access::revoke_badge(&state.pool, id, &code_hex).await?;
    Ok(Json(result))
}
