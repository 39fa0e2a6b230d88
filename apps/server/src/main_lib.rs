use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use balanco_core::metrics::{MetricsService, MetricsServiceTrait};
use balanco_core::snapshots::{SnapshotService, SnapshotServiceTrait};
use balanco_core::users::UserRepositoryTrait;
use balanco_storage_sqlite::snapshots::SnapshotRepository;
use balanco_storage_sqlite::users::UserRepository;
use balanco_storage_sqlite::{create_pool, db, run_migrations, spawn_writer};

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub snapshot_service: Arc<dyn SnapshotServiceTrait + Send + Sync>,
    pub metrics_service: Arc<dyn MetricsServiceTrait + Send + Sync>,
    pub user_repository: Arc<dyn UserRepositoryTrait + Send + Sync>,
    pub auth: AuthManager,
    pub db_path: String,
}

/// Install the global tracing subscriber. `BALANCO_LOG_FORMAT=json` switches
/// to line-delimited JSON output for log shippers; the default is the human
/// readable formatter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let format = std::env::var("BALANCO_LOG_FORMAT").unwrap_or_default();
    if format.eq_ignore_ascii_case("json") {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Wire the storage layer and domain services into a shared [`AppState`].
///
/// Opens (creating if needed) the SQLite database at the configured path,
/// runs pending migrations, and starts the single writer task that serializes
/// all mutations.
pub async fn build_state(config: &Config) -> Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let snapshot_repository = Arc::new(SnapshotRepository::new(pool.clone(), writer.clone()));
    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer));

    let snapshot_service = Arc::new(SnapshotService::new(snapshot_repository.clone()));
    let metrics_service = Arc::new(MetricsService::new(snapshot_repository));

    Ok(Arc::new(AppState {
        snapshot_service,
        metrics_service,
        user_repository,
        auth: AuthManager::new(&config.secret_key),
        db_path,
    }))
}
