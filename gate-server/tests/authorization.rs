//! Authorization core tests
//!
//! Drives `ScanService` at fixed seconds-of-day against a real migrated
//! database, covering the grant/deny decision and the event log side.

mod common;

use common::{seed_access, seed_employee, test_pool};
use gate_server::ScanService;
use gate_server::db::repository::event;
use shared::models::{EventQuery, UNKNOWN_OWNER};

const T_0800: i64 = 28_800;
const T_0900: i64 = 32_400;
const T_1800: i64 = 64_800;
const T_1900: i64 = 68_400;

#[tokio::test]
async fn test_scan_granted_inside_window() {
    let (pool, _dir) = test_pool().await;
    seed_employee(&pool, "E001", "Ada", "Lovelace", "1A2B").await;
    seed_access(&pool, "Day", T_0800, T_1800, &["1A2B"]).await;

    let scans = ScanService::new(pool.clone());
    let decision = scans.evaluate_at("1A2B", T_0900).await.unwrap();
    assert!(decision.granted);
    assert_eq!(decision.matched.len(), 1);
    assert_eq!(decision.matched[0].name, "Day");

    scans.record("1A2B", decision.granted).await;

    let (events, total) = event::find_page(&pool, &EventQuery::default()).await.unwrap();
    assert_eq!(total, 1);
    assert!(events[0].authorized);
    assert_eq!(events[0].code_hex, "1A2B");
    assert_eq!(events[0].badge_owner, "Ada Lovelace");
}

#[tokio::test]
async fn test_scan_denied_outside_window() {
    let (pool, _dir) = test_pool().await;
    seed_employee(&pool, "E001", "Ada", "Lovelace", "1A2B").await;
    seed_access(&pool, "Day", T_0800, T_1800, &["1A2B"]).await;

    let scans = ScanService::new(pool.clone());
    let decision = scans.evaluate_at("1A2B", T_1900).await.unwrap();
    assert!(!decision.granted);
    assert!(decision.matched.is_empty());

    scans.record("1A2B", decision.granted).await;

    let (events, total) = event::find_page(&pool, &EventQuery::default()).await.unwrap();
    assert_eq!(total, 1);
    assert!(!events[0].authorized);
    assert_eq!(events[0].badge_owner, "Ada Lovelace");
}

#[tokio::test]
async fn test_scan_denied_for_unlisted_badge() {
    let (pool, _dir) = test_pool().await;
    seed_employee(&pool, "E001", "Ada", "Lovelace", "1A2B").await;
    seed_access(&pool, "Day", T_0800, T_1800, &["1A2B"]).await;

    let scans = ScanService::new(pool.clone());
    // A badge listed in no policy is denied at any time of day
    for t in [0, T_0800, T_0900, T_1800, 86_340] {
        let decision = scans.evaluate_at("FFEE", t).await.unwrap();
        assert!(!decision.granted, "unexpected grant at {t}");
    }
}

#[tokio::test]
async fn test_window_bounds_are_inclusive() {
    let (pool, _dir) = test_pool().await;
    seed_employee(&pool, "E001", "Ada", "Lovelace", "1A2B").await;
    seed_access(&pool, "Day", T_0800, T_1800, &["1A2B"]).await;

    let scans = ScanService::new(pool.clone());
    assert!(scans.evaluate_at("1A2B", T_0800).await.unwrap().granted);
    assert!(scans.evaluate_at("1A2B", T_1800).await.unwrap().granted);
    // One minute either side is out
    assert!(!scans.evaluate_at("1A2B", T_0800 - 60).await.unwrap().granted);
    assert!(!scans.evaluate_at("1A2B", T_1800 + 60).await.unwrap().granted);
}

#[tokio::test]
async fn test_window_starting_at_midnight() {
    let (pool, _dir) = test_pool().await;
    seed_employee(&pool, "E001", "Ada", "Lovelace", "1A2B").await;
    seed_access(&pool, "Night shift", 0, T_0800, &["1A2B"]).await;

    let scans = ScanService::new(pool.clone());
    assert!(scans.evaluate_at("1A2B", 0).await.unwrap().granted);
}

#[tokio::test]
async fn test_inactive_policy_never_grants() {
    let (pool, _dir) = test_pool().await;
    seed_employee(&pool, "E001", "Ada", "Lovelace", "1A2B").await;
    let access_id = seed_access(&pool, "Day", T_0800, T_1800, &["1A2B"]).await;

    gate_server::db::repository::access::update(
        &pool,
        access_id,
        shared::models::AccessUpdate {
            name: None,
            start_secs: None,
            end_secs: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap();

    let scans = ScanService::new(pool.clone());
    assert!(!scans.evaluate_at("1A2B", T_0900).await.unwrap().granted);
}

#[tokio::test]
async fn test_multiple_matching_policies() {
    let (pool, _dir) = test_pool().await;
    seed_employee(&pool, "E001", "Ada", "Lovelace", "1A2B").await;
    seed_access(&pool, "Day", T_0800, T_1800, &["1A2B"]).await;
    seed_access(&pool, "Morning", T_0800, T_0900, &["1A2B"]).await;

    let scans = ScanService::new(pool.clone());
    let decision = scans.evaluate_at("1A2B", T_0900).await.unwrap();
    assert!(decision.granted);
    assert_eq!(decision.matched.len(), 2);
}

#[tokio::test]
async fn test_evaluation_is_idempotent() {
    let (pool, _dir) = test_pool().await;
    seed_employee(&pool, "E001", "Ada", "Lovelace", "1A2B").await;
    seed_access(&pool, "Day", T_0800, T_1800, &["1A2B"]).await;

    let scans = ScanService::new(pool.clone());
    let first = scans.evaluate_at("1A2B", T_0900).await.unwrap();
    let second = scans.evaluate_at("1A2B", T_0900).await.unwrap();
    assert_eq!(first.granted, second.granted);
    assert_eq!(first.matched.len(), second.matched.len());

    // Evaluation alone writes nothing
    assert_eq!(event::count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unowned_badge_recorded_as_unknown() {
    let (pool, _dir) = test_pool().await;

    let scans = ScanService::new(pool.clone());
    let decision = scans.evaluate_at("DEAD", T_0900).await.unwrap();
    assert!(!decision.granted);
    scans.record("DEAD", decision.granted).await;

    let (events, total) = event::find_page(&pool, &EventQuery::default()).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(events[0].badge_owner, UNKNOWN_OWNER);
    assert!(!events[0].authorized);
}

#[tokio::test]
async fn test_owner_name_is_snapshot_not_reference() {
    let (pool, _dir) = test_pool().await;
    let emp = seed_employee(&pool, "E001", "Ada", "Lovelace", "1A2B").await;
    seed_access(&pool, "Day", T_0800, T_1800, &["1A2B"]).await;

    let scans = ScanService::new(pool.clone());
    scans.record("1A2B", true).await;

    // Rename the employee after the event was written
    gate_server::db::repository::employee::update(
        &pool,
        emp.id,
        shared::models::EmployeeUpdate {
            code: None,
            first_name: Some("Augusta".into()),
            last_name: None,
            department: None,
        },
    )
    .await
    .unwrap();

    let (events, _) = event::find_page(&pool, &EventQuery::default()).await.unwrap();
    assert_eq!(events[0].badge_owner, "Ada Lovelace");
}
