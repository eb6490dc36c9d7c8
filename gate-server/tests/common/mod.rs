//! Shared helpers for integration tests

use gate_server::db::DbService;
use gate_server::db::repository::{access, employee};
use shared::models::{AccessCreate, Employee, EmployeeCreate};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Open a fresh migrated database in a temp directory.
///
/// The `TempDir` must stay alive for the duration of the test.
pub async fn test_pool() -> (SqlitePool, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("gatehouse.db");
    let db = DbService::new(&db_path.to_string_lossy())
        .await
        .expect("open test database");
    (db.pool, dir)
}

/// Create an employee with one badge
pub async fn seed_employee(
    pool: &SqlitePool,
    code: &str,
    first: &str,
    last: &str,
    badge_hex: &str,
) -> Employee {
    let created = employee::create(
        pool,
        EmployeeCreate {
            code: code.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            department: None,
        },
    )
    .await
    .expect("create employee");
    employee::add_badge(pool, created.employee.id, badge_hex, None)
        .await
        .expect("add badge");
    created.employee
}

/// Create an access policy and authorize the given badges on it
pub async fn seed_access(
    pool: &SqlitePool,
    name: &str,
    start_secs: i64,
    end_secs: i64,
    badges: &[&str],
) -> i64 {
    let created = access::create(
        pool,
        AccessCreate {
            name: name.to_string(),
            start_secs,
            end_secs,
        },
    )
    .await
    .expect("create access policy");
    for badge in badges {
        access::grant_badge(pool, created.access.id, badge)
            .await
            .expect("grant badge");
    }
    created.access.id
}
