use std::sync::Arc;

use savvy_core::lookup::BusinessLookup;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: savvy_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Business search backing `GET /api/businesses/search`.
    pub lookup: Arc<dyn BusinessLookup>,
}

impl AppState {
    /// State whose lookup searches the same database as the pool.
    pub fn new(pool: savvy_db::DbPool, config: ServerConfig) -> Self {
        let lookup = Arc::new(savvy_db::lookup::PgBusinessLookup::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            lookup,
        }
    }
}
