use std::path::PathBuf;

/// Server configuration
///
/// Every field can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/gatehouse | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | Admin API port |
/// | READER_ADDR | 127.0.0.1:7700 | Badge reader bridge address |
/// | READER_RETRY_MS | 1000 | Reconnect backoff after a link fault |
/// | LOG_LEVEL | info | Log level |
/// | ENVIRONMENT | development | Runtime environment |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// Admin HTTP API port
    pub http_port: u16,
    /// Address of the RS-232↔TCP reader bridge
    pub reader_addr: String,
    /// Fixed backoff between reader reconnect attempts (milliseconds)
    pub reader_retry_ms: u64,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/gatehouse".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            reader_addr: std::env::var("READER_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:7700".into()),
            reader_retry_ms: std::env::var("READER_RETRY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the fields tests care about
    pub fn with_overrides(
        work_dir: impl Into<String>,
        http_port: u16,
        reader_addr: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.reader_addr = reader_addr.into();
        config
    }

    /// Directory holding the SQLite database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding rolling log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
