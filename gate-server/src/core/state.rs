use sqlx::SqlitePool;

use crate::authz::ScanService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared application state
///
/// Held by every HTTP handler and by the reader gateway. `Clone` is
/// cheap: the pool is reference counted.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Initialize state: work directory layout, database, migrations
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("gatehouse.db");
        let db = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }

    /// Scan authorization service over this state's pool
    pub fn scan_service(&self) -> ScanService {
        ScanService::new(self.pool.clone())
    }
}
