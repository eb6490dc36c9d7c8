//! Core module — server configuration, state and errors
//!
//! - [`Config`] — server configuration
//! - [`ServerState`] — shared application state
//! - [`Server`] — HTTP server + reader gateway lifecycle
//! - [`ServerError`] — top-level server error

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
