//! Event Model

use serde::{Deserialize, Serialize};

/// Owner name recorded when no employee owns the scanned badge
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Authorization event — immutable, append-only
///
/// `badge_owner` is a snapshot of the owner's display name at scan time;
/// later employee renames do not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Event {
    pub id: i64,
    pub code_hex: String,
    pub badge_owner: String,
    pub authorized: bool,
    pub created_at: i64,
}

/// New event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    pub code_hex: String,
    pub badge_owner: String,
    pub authorized: bool,
}

/// Event log query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct EventQuery {
    /// Start time (Unix millis, inclusive)
    pub from: Option<i64>,
    /// End time (Unix millis, inclusive)
    pub to: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

/// Event log list response
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub items: Vec<Event>,
    pub total: u64,
}
