pub mod data;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use data::Dataset;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fridge item not found: {0}")]
    ItemNotFound(Uuid),
    #[error("meal not found: {0}")]
    MealNotFound(Uuid),
    #[error("shopping event not found: {0}")]
    EventNotFound(Uuid),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
}

/// Persistence seam for the dataset. The file-backed implementation is the
/// production one; tests swap in [`MemoryPersister`].
#[async_trait]
pub trait Persister: Send + Sync {
    /// Returns `None` when nothing has been persisted yet.
    async fn load(&self) -> Result<Option<Dataset>, StoreError>;
    async fn save(&self, data: Dataset) -> Result<(), StoreError>;
}

/// Stores the dataset as a single pretty-printed JSON document, written to a
/// `.tmp` sibling and moved into place so a crash never leaves a torn file.
pub struct JsonFilePersister {
    path: PathBuf,
}

impl JsonFilePersister {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Persister for JsonFilePersister {
    async fn load(&self) -> Result<Option<Dataset>, StoreError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<Option<Dataset>, StoreError> {
            if !path.exists() {
                return Ok(None);
            }
            let contents = std::fs::read_to_string(&path)?;
            Ok(Some(serde_json::from_str(&contents)?))
        })
        .await
        .map_err(|e| StoreError::Io(std::io::Error::other(format!("spawn_blocking failed: {e}"))))?
    }

    async fn save(&self, data: Dataset) -> Result<(), StoreError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            use std::io::Write;

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let temp = path.with_extension("tmp");
            let mut f = std::fs::File::create(&temp)?;
            let content = serde_json::to_string_pretty(&data)?;
            f.write_all(content.as_bytes())?;
            f.sync_all()?;
            std::fs::rename(temp, &path)?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Io(std::io::Error::other(format!("spawn_blocking failed: {e}"))))?
    }
}

/// Keeps nothing between saves. Used by tests and `AppState::in_memory`.
pub struct MemoryPersister;

#[async_trait]
impl Persister for MemoryPersister {
    async fn load(&self) -> Result<Option<Dataset>, StoreError> {
        Ok(None)
    }

    async fn save(&self, _data: Dataset) -> Result<(), StoreError> {
        Ok(())
    }
}

/// The in-memory dataset plus its persistence backend. Handlers mutate the
/// dataset through `data_mut` and call `persist` afterwards; a failed save
/// keeps the mutation in memory for the next successful one.
pub struct Store {
    persister: Arc<dyn Persister>,
    data: Dataset,
}

impl Store {
    /// Loads the persisted dataset, or starts from an empty one (and writes
    /// it out, so a fresh install has a file on disk from the start).
    pub async fn open(persister: Arc<dyn Persister>) -> Result<Self, StoreError> {
        let data = match persister.load().await? {
            Some(data) => data,
            None => {
                let data = Dataset::default();
                persister.save(data.clone()).await?;
                data
            }
        };
        Ok(Self { persister, data })
    }

    pub fn from_parts(persister: Arc<dyn Persister>, data: Dataset) -> Self {
        Self { persister, data }
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Dataset {
        &mut self.data
    }

    /// Replaces the whole dataset (import path).
    pub fn replace(&mut self, data: Dataset) {
        self.data = data;
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        self.persister.save(self.data.clone()).await
    }
}
