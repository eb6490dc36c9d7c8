//! Access Policy Model

use serde::{Deserialize, Serialize};

/// Last valid second-of-day (23:59, minute granularity)
pub const MAX_DAY_SECS: i64 = 86_399;

/// Access policy — a named daily time window plus an authorized badge set
///
/// `start_secs`/`end_secs` are seconds since local midnight, both bounds
/// inclusive. Windows never span midnight (`start_secs <= end_secs`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Access {
    pub id: i64,
    pub name: String,
    pub start_secs: i64,
    pub end_secs: i64,
    pub is_active: bool,
    pub created_at: i64,
}

/// One badge authorized by a policy, with the owning employee snapshot
/// captured at grant time (display cache, not a live reference)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AccessBadge {
    pub access_id: i64,
    pub code_hex: String,
    pub employee_id: i64,
    pub employee_name: String,
    pub employee_code: String,
    pub granted_at: i64,
}

/// Access policy with its authorized badges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessWithBadges {
    #[serde(flatten)]
    pub access: Access,
    pub badges: Vec<AccessBadge>,
}

/// Create access policy payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessCreate {
    pub name: String,
    pub start_secs: i64,
    pub end_secs: i64,
}

/// Update access policy payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessUpdate {
    pub name: Option<String>,
    pub start_secs: Option<i64>,
    pub end_secs: Option<i64>,
    pub is_active: Option<bool>,
}

/// Grant badge payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeGrant {
    pub code_hex: String,
}
