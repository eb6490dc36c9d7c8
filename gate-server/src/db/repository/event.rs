//! Event Repository
//!
//! Append-only: there is no update or delete here on purpose.

use shared::models::{Event, EventCreate, EventQuery};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

pub async fn append(pool: &SqlitePool, data: EventCreate) -> RepoResult<Event> {
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO event (id, code_hex, badge_owner, authorized, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.code_hex)
    .bind(&data.badge_owner)
    .bind(data.authorized)
    .bind(now_millis())
    .execute(pool)
    .await?;

    let event = sqlx::query_as::<_, Event>(
        "SELECT id, code_hex, badge_owner, authorized, created_at FROM event WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    event.ok_or_else(|| RepoError::Database("Failed to append event".into()))
}

/// Page through events, newest first, with optional time-range filter
pub async fn find_page(pool: &SqlitePool, query: &EventQuery) -> RepoResult<(Vec<Event>, u64)> {
    let from = query.from.unwrap_or(i64::MIN);
    let to = query.to.unwrap_or(i64::MAX);

    let items = sqlx::query_as::<_, Event>(
        "SELECT id, code_hex, badge_owner, authorized, created_at FROM event WHERE created_at >= ?1 AND created_at <= ?2 ORDER BY created_at DESC, id DESC LIMIT ?3 OFFSET ?4",
    )
    .bind(from)
    .bind(to)
    .bind(query.limit)
    .bind(query.offset)
    .fetch_all(pool)
    .await?;

    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM event WHERE created_at >= ?1 AND created_at <= ?2",
    )
    .bind(from)
    .bind(to)
    .fetch_one(pool)
    .await?;

    Ok((items, total as u64))
}

/// Total number of recorded events
pub async fn count(pool: &SqlitePool) -> RepoResult<u64> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM event")
        .fetch_one(pool)
        .await?;
    Ok(total as u64)
}
