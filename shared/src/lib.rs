//! Shared types for the Gatehouse access control system
//!
//! Common types used across crates: data models, the reader frame
//! protocol, and small utilities (timestamps, ID generation).

pub mod frame;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Frame protocol re-exports (for convenient access)
pub use frame::{ACK_DENIED, ACK_GRANTED, FrameError, ReaderCommand, ScanFrame};
