//! Access Policy Repository
//!
//! The `access` ⋈ `access_badge` join is the single source of truth the
//! authorization evaluator reads. Employee data is only copied in as a
//! display snapshot at grant time.

use shared::models::{
    Access, AccessBadge, AccessCreate, AccessUpdate, AccessWithBadges, MAX_DAY_SECS,
};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, employee};

/// Validate a policy time window: same-day, inclusive bounds.
///
/// An inverted window (`start > end`) could never match a scan, so it is
/// rejected at creation time instead of being stored as dead data.
fn validate_window(start_secs: i64, end_secs: i64) -> RepoResult<()> {
    if !(0..=MAX_DAY_SECS).contains(&start_secs) || !(0..=MAX_DAY_SECS).contains(&end_secs) {
        return Err(RepoError::Validation(format!(
            "Time window must be within 0..={MAX_DAY_SECS} seconds since midnight, got {start_secs}..{end_secs}"
        )));
    }
    if start_secs > end_secs {
        return Err(RepoError::Validation(format!(
            "Time window must not span midnight: start {start_secs} is after end {end_secs}"
        )));
    }
    Ok(())
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<AccessWithBadges>> {
    let accesses = sqlx::query_as::<_, Access>(
        "SELECT id, name, start_secs, end_secs, is_active, created_at FROM access ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    let mut result = Vec::with_capacity(accesses.len());
    for access in accesses {
        let badges = badges_of(pool, access.id).await?;
        result.push(AccessWithBadges { access, badges });
    }
    Ok(result)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Access>> {
    let access = sqlx::query_as::<_, Access>(
        "SELECT id, name, start_secs, end_secs, is_active, created_at FROM access WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(access)
}

pub async fn find_with_badges(pool: &SqlitePool, id: i64) -> RepoResult<Option<AccessWithBadges>> {
    let Some(access) = find_by_id(pool, id).await? else {
        return Ok(None);
    };
    let badges = badges_of(pool, access.id).await?;
    Ok(Some(AccessWithBadges { access, badges }))
}

pub async fn badges_of(pool: &SqlitePool, access_id: i64) -> RepoResult<Vec<AccessBadge>> {
    let badges = sqlx::query_as::<_, AccessBadge>(
        "SELECT access_id, code_hex, employee_id, employee_name, employee_code, granted_at FROM access_badge WHERE access_id = ? ORDER BY granted_at",
    )
    .bind(access_id)
    .fetch_all(pool)
    .await?;
    Ok(badges)
}

pub async fn create(pool: &SqlitePool, data: AccessCreate) -> RepoResult<AccessWithBadges> {
    validate_window(data.start_secs, data.end_secs)?;

    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO access (id, name, start_secs, end_secs, is_active, created_at) VALUES (?, ?, ?, ?, 1, ?)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.start_secs)
    .bind(data.end_secs)
    .bind(now_millis())
    .execute(pool)
    .await?;

    find_with_badges(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create access policy".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: AccessUpdate) -> RepoResult<AccessWithBadges> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Access policy {id} not found")))?;

    // Validate the merged window, not just the changed fields
    let start_secs = data.start_secs.unwrap_or(existing.start_secs);
    let end_secs = data.end_secs.unwrap_or(existing.end_secs);
    validate_window(start_secs, end_secs)?;

    sqlx::query(
        "UPDATE access SET name = COALESCE(?1, name), start_secs = ?2, end_secs = ?3, is_active = COALESCE(?4, is_active) WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(start_secs)
    .bind(end_secs)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    find_with_badges(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Access policy {id} not found")))
}

/// Hard delete a policy. Its badge grants cascade.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    if find_by_id(pool, id).await?.is_none() {
        return Err(RepoError::NotFound(format!("Access policy {id} not found")));
    }
    sqlx::query("DELETE FROM access WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(true)
}

// ── Badge grants ────────────────────────────────────────────────────

/// Authorize a badge on a policy, snapshotting the owning employee for
/// display. The badge must currently be assigned to an employee.
pub async fn grant_badge(
    pool: &SqlitePool,
    access_id: i64,
    code_hex: &str,
) -> RepoResult<AccessBadge> {
    if find_by_id(pool, access_id).await?.is_none() {
        return Err(RepoError::NotFound(format!(
            "Access policy {access_id} not found"
        )));
    }

    let owner = employee::find_by_badge(pool, code_hex)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Badge '{code_hex}' not found")))?;

    let inserted = sqlx::query(
        "INSERT OR IGNORE INTO access_badge (access_id, code_hex, employee_id, employee_name, employee_code, granted_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(access_id)
    .bind(code_hex)
    .bind(owner.id)
    .bind(owner.display_name())
    .bind(&owner.code)
    .bind(now_millis())
    .execute(pool)
    .await?;

    if inserted.rows_affected() == 0 {
        return Err(RepoError::Duplicate(format!(
            "Badge '{code_hex}' is already authorized on policy {access_id}"
        )));
    }

    let grant = sqlx::query_as::<_, AccessBadge>(
        "SELECT access_id, code_hex, employee_id, employee_name, employee_code, granted_at FROM access_badge WHERE access_id = ? AND code_hex = ?",
    )
    .bind(access_id)
    .bind(code_hex)
    .fetch_one(pool)
    .await?;
    Ok(grant)
}

pub async fn revoke_badge(pool: &SqlitePool, access_id: i64, code_hex: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM access_badge WHERE access_id = ? AND code_hex = ?")
        .bind(access_id)
        .bind(code_hex)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Badge '{code_hex}' is not authorized on policy {access_id}"
        )));
    }
    Ok(true)
}

// ── Authorization query ─────────────────────────────────────────────

/// Find the active policies authorizing `code_hex` at `day_secs`
/// (seconds since local midnight). Bounds are inclusive on both ends.
pub async fn find_active_for(
    pool: &SqlitePool,
    code_hex: &str,
    day_secs: i64,
) -> RepoResult<Vec<Access>> {
    let matches = sqlx::query_as::<_, Access>(
        "SELECT a.id, a.name, a.start_secs, a.end_secs, a.is_active, a.created_at FROM access a JOIN access_badge ab ON ab.access_id = a.id WHERE a.is_active = 1 AND a.start_secs <= ?1 AND a.end_secs >= ?1 AND ab.code_hex = ?2 ORDER BY a.name",
    )
    .bind(day_secs)
    .bind(code_hex)
    .fetch_all(pool)
    .await?;
    Ok(matches)
}
