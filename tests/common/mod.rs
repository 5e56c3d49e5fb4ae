#![allow(dead_code)]

use repo_showcase_server::pool::{create_pool, PoolConfig, SurrealConnectionConfig, SurrealPool};
use repo_showcase_server::store::EntryStore;
use std::sync::Arc;

pub struct TestContext {
    pub store: EntryStore,
}

impl TestContext {
    pub async fn new() -> anyhow::Result<Self> {
        // Embedded in-memory engine; every context gets a fresh database
        let store = EntryStore::memory().await?;
        Ok(TestContext { store })
    }
}

/// Connection pool over the embedded in-memory engine.
///
/// Pool size is pinned to 1: every mem:// connection is its own database,
/// so a larger pool would scatter records across instances.
pub fn memory_pool() -> Arc<SurrealPool> {
    let connection_config = SurrealConnectionConfig {
        url: "mem://".to_string(),
        username: String::new(),
        password: String::new(),
        namespace: "showcase".to_string(),
        database: "cards".to_string(),
    };

    let pool_config = PoolConfig {
        max_size: 1,
        min_idle: None,
        ..Default::default()
    };

    Arc::new(create_pool(connection_config, pool_config).expect("failed to build pool"))
}
