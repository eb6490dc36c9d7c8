//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{Badge, BadgeCreate, EmployeeCreate, EmployeeUpdate, EmployeeWithBadges};

use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_badge_hex, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// List all employees with their badges
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeWithBadges>>> {
    let employees = employee::find_all(&state.pool).await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EmployeeWithBadges>> {
    let employee = employee::find_with_badges(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<EmployeeWithBadges>> {
    validate_required_text(&payload.code, "code", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "last_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.department, "department", MAX_NAME_LEN)?;

    let employee = employee::create(&state.pool, payload).await?;
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeWithBadges>> {
    validate_optional_text(&payload.code, "code", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.last_name, "last_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.department, "department", MAX_NAME_LEN)?;

    let employee = employee::update(&state.pool, id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee (badges cascade, their grants are revoked)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = employee::delete(&state.pool, id).await?;
    Ok(Json(result))
}

/// Add a badge to an employee
pub async fn add_badge(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BadgeCreate>,
) -> AppResult<Json<Badge>> {
    let code_hex = validate_badge_hex(&payload.code_hex)?;
    validate_optional_text(&payload.code_dec, "code_dec", MAX_SHORT_TEXT_LEN)?;

    let badge = employee::add_badge(&state.pool, id, &code_hex, payload.code_dec).await?;
    Ok(Json(badge))
}

/// Remove a badge from an employee (revokes its policy grants)
pub async fn remove_badge(
    State(state): State<ServerState>,
    Path((id, code_hex)): Path<(i64, String)>,
) -> AppResult<Json<bool>> {
    let code_hex = validate_badge_hex(&code_hex)?;
    let result = employee::remove_badge(&state.pool, id, &code_hex).await?;
    Ok(Json(result))
}
