//! Authorization Evaluator
//!
//! Grant iff at least one active policy covers the scan time and lists
//! the badge. Policy store failures propagate — the gateway then sends
//! nothing back (fail closed) instead of guessing a default.

use shared::frame::{ACK_DENIED, ACK_GRANTED};
use shared::models::Access;
use sqlx::SqlitePool;

use super::recorder::EventRecorder;
use crate::db::repository::access;
use crate::utils::{AppResult, time};

/// Outcome of one authorization
#[derive(Debug, Clone)]
pub struct AccessDecision {
    pub granted: bool,
    /// Active policies that matched (empty when denied)
    pub matched: Vec<Access>,
}

impl AccessDecision {
    /// Ack byte for the reader (`y` / `n`)
    pub fn ack(&self) -> u8 {
        if self.granted { ACK_GRANTED } else { ACK_DENIED }
    }
}

/// Scan authorization service
///
/// Stateless over the shared pool; cheap to clone per task.
#[derive(Clone)]
pub struct ScanService {
    pool: SqlitePool,
    recorder: EventRecorder,
}

impl ScanService {
    pub fn new(pool: SqlitePool) -> Self {
        let recorder = EventRecorder::new(pool.clone());
        Self { pool, recorder }
    }

    /// Evaluate a badge at an explicit second-of-day
    pub async fn evaluate_at(&self, badge_hex: &str, day_secs: i64) -> AppResult<AccessDecision> {
        tracing::debug!(badge = %badge_hex, day_secs, "Checking authorization");
        let matched = access::find_active_for(&self.pool, badge_hex, day_secs).await?;
        let granted = !matched.is_empty();

        if granted {
            tracing::info!(badge = %badge_hex, policies = matched.len(), "Badge authorized");
        } else {
            tracing::warn!(badge = %badge_hex, "Badge not authorized");
        }

        Ok(AccessDecision { granted, matched })
    }

    /// Evaluate a badge right now (local time, minute granularity)
    pub async fn evaluate(&self, badge_hex: &str) -> AppResult<AccessDecision> {
        self.evaluate_at(badge_hex, time::local_day_seconds()).await
    }

    /// Record the attempt in the event log, best effort
    ///
    /// The ack has already been delivered when this runs; an audit write
    /// failure is logged and must not surface to the reader.
    pub async fn record(&self, badge_hex: &str, authorized: bool) {
        if let Err(e) = self.recorder.record(badge_hex, authorized).await {
            tracing::error!(badge = %badge_hex, error = %e, "Failed to record authorization event");
        }
    }
}
