//! Event Recorder
//!
//! Persists one immutable event per authorization attempt, resolving the
//! badge to its owner's display name at scan time. Owner names are a
//! snapshot: renaming an employee later does not rewrite history.

use shared::models::{Event, EventCreate, UNKNOWN_OWNER};
use sqlx::SqlitePool;

use crate::db::repository::{RepoResult, employee, event};

#[derive(Clone)]
pub struct EventRecorder {
    pool: SqlitePool,
}

impl EventRecorder {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one event for a scan attempt
    ///
    /// Badge codes are unique across employees, so owner resolution is a
    /// total match; unowned codes are recorded as [`UNKNOWN_OWNER`].
    pub async fn record(&self, code_hex: &str, authorized: bool) -> RepoResult<Event> {
        let badge_owner = employee::find_by_badge(&self.pool, code_hex)
            .await?
            .map(|e| e.display_name())
            .unwrap_or_else(|| UNKNOWN_OWNER.to_string());

        event::append(
            &self.pool,
            EventCreate {
                code_hex: code_hex.to_string(),
                badge_owner,
                authorized,
            },
        )
        .await
    }
}
