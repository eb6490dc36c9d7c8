//! Employee Repository
//!
//! Employees own their badges (composition): badge rows are created and
//! removed through the owning employee, never on their own. Removing a
//! badge also revokes it from every access policy in the same transaction,
//! keeping the policy badge sets consistent with ownership.

use shared::models::{Badge, Employee, EmployeeCreate, EmployeeUpdate, EmployeeWithBadges};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<EmployeeWithBadges>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, code, first_name, last_name, department, created_at FROM employee ORDER BY last_name, first_name",
    )
    .fetch_all(pool)
    .await?;

    let mut result = Vec::with_capacity(employees.len());
    for employee in employees {
        let badges = badges_of(pool, employee.id).await?;
        result.push(EmployeeWithBadges { employee, badges });
    }
    Ok(result)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, code, first_name, last_name, department, created_at FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, code, first_name, last_name, department, created_at FROM employee WHERE code = ? LIMIT 1",
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn find_with_badges(
    pool: &SqlitePool,
    id: i64,
) -> RepoResult<Option<EmployeeWithBadges>> {
    let Some(employee) = find_by_id(pool, id).await? else {
        return Ok(None);
    };
    let badges = badges_of(pool, employee.id).await?;
    Ok(Some(EmployeeWithBadges { employee, badges }))
}

pub async fn badges_of(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<Badge>> {
    let badges = sqlx::query_as::<_, Badge>(
        "SELECT id, employee_id, code_hex, code_dec, is_active, created_at FROM badge WHERE employee_id = ? ORDER BY created_at",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(badges)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<EmployeeWithBadges> {
    // Check duplicate employee code
    if find_by_code(pool, &data.code).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Employee code '{}' already exists",
            data.code
        )));
    }

    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO employee (id, code, first_name, last_name, department, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.code)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.department)
    .bind(now_millis())
    .execute(pool)
    .await?;

    find_with_badges(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: EmployeeUpdate,
) -> RepoResult<EmployeeWithBadges> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;

    // Check duplicate code if changing
    if let Some(ref new_code) = data.code
        && new_code != &existing.code
        && find_by_code(pool, new_code).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Employee code '{new_code}' already exists"
        )));
    }

    sqlx::query(
        "UPDATE employee SET code = COALESCE(?1, code), first_name = COALESCE(?2, first_name), last_name = COALESCE(?3, last_name), department = COALESCE(?4, department) WHERE id = ?5",
    )
    .bind(&data.code)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.department)
    .bind(id)
    .execute(pool)
    .await?;

    find_with_badges(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Hard delete an employee. Badges cascade; their policy grants are
/// revoked in the same transaction.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    if find_by_id(pool, id).await?.is_none() {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }

    let mut tx = pool.begin().await?;
    sqlx::query(
        "DELETE FROM access_badge WHERE code_hex IN (SELECT code_hex FROM badge WHERE employee_id = ?)",
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;
    sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(true)
}

// ── Badges ──────────────────────────────────────────────────────────

/// Resolve the employee owning a badge hex-code, if any
pub async fn find_by_badge(pool: &SqlitePool, code_hex: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT e.id, e.code, e.first_name, e.last_name, e.department, e.created_at FROM employee e JOIN badge b ON b.employee_id = e.id WHERE b.code_hex = ? LIMIT 1",
    )
    .bind(code_hex)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Look up a badge row by hex-code
pub async fn find_badge(pool: &SqlitePool, code_hex: &str) -> RepoResult<Option<Badge>> {
    let badge = sqlx::query_as::<_, Badge>(
        "SELECT id, employee_id, code_hex, code_dec, is_active, created_at FROM badge WHERE code_hex = ? LIMIT 1",
    )
    .bind(code_hex)
    .fetch_optional(pool)
    .await?;
    Ok(badge)
}

/// Add a badge to an employee. `code_hex` must already be validated and
/// normalized; uniqueness is global across all employees.
pub async fn add_badge(
    pool: &SqlitePool,
    employee_id: i64,
    code_hex: &str,
    code_dec: Option<String>,
) -> RepoResult<Badge> {
    if find_by_id(pool, employee_id).await?.is_none() {
        return Err(RepoError::NotFound(format!(
            "Employee {employee_id} not found"
        )));
    }

    if let Some(existing) = find_badge(pool, code_hex).await? {
        return Err(RepoError::Duplicate(format!(
            "Badge '{}' already assigned to employee {}",
            code_hex, existing.employee_id
        )));
    }

    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO badge (id, employee_id, code_hex, code_dec, is_active, created_at) VALUES (?, ?, ?, ?, 1, ?)",
    )
    .bind(id)
    .bind(employee_id)
    .bind(code_hex)
    .bind(&code_dec)
    .bind(now_millis())
    .execute(pool)
    .await?;

    find_badge(pool, code_hex)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create badge".into()))
}

/// Remove a badge from an employee and revoke its policy grants
pub async fn remove_badge(pool: &SqlitePool, employee_id: i64, code_hex: &str) -> RepoResult<bool> {
    let badge = find_badge(pool, code_hex)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Badge '{code_hex}' not found")))?;
    if badge.employee_id != employee_id {
        return Err(RepoError::NotFound(format!(
            "Badge '{code_hex}' does not belong to employee {employee_id}"
        )));
    }

    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM access_badge WHERE code_hex = ?")
        .bind(code_hex)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM badge WHERE id = ?")
        .bind(badge.id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(true)
}
