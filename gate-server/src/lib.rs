//! Gatehouse Edge Server — badge access control node
//!
//! # Architecture
//!
//! - **Reader gateway** (`reader`): single serial-over-TCP link to the
//!   badge reader, newline frames in, ack bytes out, self-healing
//! - **Authorization** (`authz`): time-window policy evaluation plus the
//!   append-only event log
//! - **Database** (`db`): embedded SQLite via sqlx
//! - **Admin API** (`api`): JSON console for employees, badges, policies
//!   and events
//!
//! # Module layout
//!
//! ```text
//! gate-server/src/
//! ├── core/          # Config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── authz/         # Authorization evaluator + event recorder
//! ├── reader/        # Reader gateway and link transport
//! ├── db/            # Database layer
//! └── utils/         # Logging, validation, time helpers
//! ```

pub mod api;
pub mod authz;
pub mod core;
pub mod db;
pub mod reader;
pub mod utils;

// Re-export public types
pub use authz::{AccessDecision, EventRecorder, ScanService};
pub use core::{Config, Server, ServerState};
pub use reader::{ReaderGateway, ReaderLink, TcpReaderLink};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment: dotenv, work directory, logging
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    init_logger_with_file(Some(&config.log_level), log_dir.to_str());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______      __       __
  / ____/___ _/ /____  / /_  ____  __  __________
 / / __/ __ `/ __/ _ \/ __ \/ __ \/ / / / ___/ _ \
/ /_/ / /_/ / /_/  __/ / / / /_/ / /_/ (__  )  __/
\____/\__,_/\__/\___/_/ /_/\____/\__,_/____/\___/
    "#
    );
}
