//! Authorization core
//!
//! Decides whether a scanned badge may pass at the current time and logs
//! every attempt:
//!
//! - [`ScanService`] — the decision function over the policy store
//! - [`EventRecorder`] — best-effort append-only audit sink
//!
//! A scan is handled fully (evaluate → ack → record) before the next one
//! is read; the reader gateway drives exactly one scan at a time.

pub mod evaluator;
pub mod recorder;

pub use evaluator::{AccessDecision, ScanService};
pub use recorder::EventRecorder;
