use std::sync::Arc;

use crate::config::{CatalogBackend, Config};
use crate::store::{CatalogStore, FixtureStore, SqliteCatalogStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn CatalogStore> = match config.database.backend {
            CatalogBackend::Fixtures => Arc::new(FixtureStore::new()),
            CatalogBackend::Sqlite => {
                let store = SqliteCatalogStore::new(&config.database.url);
                store.init().await?;
                Arc::new(store)
            }
        };

        Ok(Self { store, config })
    }

    pub fn with_store(store: Arc<dyn CatalogStore>, config: Config) -> Self {
        Self { store, config }
    }
}
