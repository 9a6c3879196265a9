use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::store::{JsonFilePersister, MemoryPersister, Persister, Store};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let persister = Arc::new(JsonFilePersister::new(config.data_path.clone())) as Arc<dyn Persister>;
        let store = Store::open(persister).await?;
        Ok(Self {
            config,
            store: Arc::new(RwLock::new(store)),
        })
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Store) -> Self {
        Self {
            config,
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// State backed by a persister that keeps nothing. For tests.
    pub fn in_memory() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            data_path: "unused".into(),
        });
        let store = Store::from_parts(Arc::new(MemoryPersister), Default::default());
        Self::from_parts(config, store)
    }
}
