use deadpool::{managed, Runtime};
use std::time::Duration;

use crate::error::ShowcaseError as ServerError;
use crate::store::EntryStore;

#[derive(Debug, Clone)]
pub struct SurrealConnectionConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
}

#[derive(Debug)]
pub struct SurrealConnectionManager {
    config: SurrealConnectionConfig,
}

impl SurrealConnectionManager {
    pub fn new(config: SurrealConnectionConfig) -> Self {
        Self { config }
    }
}

impl managed::Manager for SurrealConnectionManager {
    type Type = EntryStore;
    type Error = ServerError;

    async fn create(&self) -> Result<Self::Type, Self::Error> {
        EntryStore::new(
            &self.config.url,
            &self.config.username,
            &self.config.password,
            &self.config.namespace,
            &self.config.database,
        )
        .await
        .map_err(|e| ServerError::PersistenceError(format!("Failed to connect: {}", e)))
    }

    async fn recycle(
        &self,
        conn: &mut Self::Type,
        _: &managed::Metrics,
    ) -> managed::RecycleResult<Self::Error> {
        // Probe the connection before handing it back out
        match conn.db.query("RETURN 1").await {
            Ok(_) => Ok(()),
            Err(e) => Err(managed::RecycleError::Backend(ServerError::PersistenceError(
                format!("Failed to recycle connection: {}", e),
            ))),
        }
    }
}

pub type SurrealPool = managed::Pool<SurrealConnectionManager>;

#[derive(Clone)]
pub struct PoolConfig {
    pub max_size: usize,
    pub min_idle: Option<usize>,
    pub max_lifetime: Option<Duration>,
    pub idle_timeout: Option<Duration>,
    pub connection_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: 10,
            min_idle: Some(2),
            max_lifetime: Some(Duration::from_secs(3600)),
            idle_timeout: Some(Duration::from_secs(600)),
            connection_timeout: Duration::from_secs(30),
        }
    }
}

pub fn create_pool(
    connection_config: SurrealConnectionConfig,
    pool_config: PoolConfig,
) -> Result<SurrealPool, ServerError> {
    let manager = SurrealConnectionManager::new(connection_config);

    let mut builder = managed::Pool::builder(manager)
        .max_size(pool_config.max_size)
        .runtime(Runtime::Tokio1);

    builder = builder.create_timeout(Some(pool_config.connection_timeout));

    if let Some(idle_timeout) = pool_config.idle_timeout {
        builder = builder.recycle_timeout(Some(idle_timeout));
    }

    builder
        .build()
        .map_err(|e| ServerError::PersistenceError(format!("Failed to create connection pool: {}", e)))
}
