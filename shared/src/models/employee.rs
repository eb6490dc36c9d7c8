//! Employee and Badge Models

use serde::{Deserialize, Serialize};

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    /// Internal employee code (unique)
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub created_at: i64,
}

impl Employee {
    /// Display name as shown on event records
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Badge entity — owned by exactly one employee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Badge {
    pub id: i64,
    pub employee_id: i64,
    /// Hex code (unique, uppercase) — the authoritative identifier used in matching
    pub code_hex: String,
    /// Decimal form printed on the badge, display only
    pub code_dec: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
}

/// Employee with the badges they own
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeWithBadges {
    #[serde(flatten)]
    pub employee: Employee,
    pub badges: Vec<Badge>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
}

/// Add badge payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeCreate {
    pub code_hex: String,
    pub code_dec: Option<String>,
}
