//! File-backed store snapshot repository.
//!
//! The snapshot is one JSON record (`<storage key>.json`) managed by
//! version-migrate's FileStorage, so older snapshot versions are migrated on
//! load.

use crate::dto::{APP_STATE_ENTITY, create_app_state_migrator};
use crate::paths::{SarthiPaths, ServiceType};
use sarthi_core::error::{Result, SarthiError};
use sarthi_core::state::model::AppState;
use sarthi_core::state::repository::StateRepository;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use version_migrate::{FileStorage, FileStorageStrategy, FormatStrategy, LoadBehavior};

/// Snapshot repository backed by a JSON file.
///
/// The last loaded or saved state is cached in memory so `load_state` does
/// not touch the disk. `clear` drops the cache and removes the file.
#[derive(Clone)]
pub struct FileStateRepository {
    path: PathBuf,
    /// `None` after `clear` or when no record exists yet.
    cached: Arc<Mutex<Option<AppState>>>,
    storage: Arc<Mutex<FileStorage>>,
}

impl FileStateRepository {
    /// Opens the snapshot resolved by `paths`.
    ///
    /// A file that exists but cannot be parsed or migrated is moved aside
    /// with [`quarantine`](Self::quarantine) and an empty repository is opened
    /// in its place. I/O failures are returned as they are.
    pub async fn new(paths: &SarthiPaths) -> Result<Self> {
        let file_path = paths.get_path(ServiceType::Snapshot)?.into_path_buf();
        match Self::open(&file_path).await {
            Err(e) if !e.is_io() => {
                tracing::warn!(
                    path = %file_path.display(),
                    error = %e,
                    "Saved state is unreadable; starting over"
                );
                Self::quarantine(&file_path).await?;
                Self::open(file_path).await
            }
            result => result,
        }
    }

    /// Opens (or prepares to create) the snapshot at `file_path`.
    ///
    /// Fails when the file exists but cannot be parsed or migrated.
    pub async fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let path = file_path.into();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let storage_path = path.clone();
        let (storage, initial) = tokio::task::spawn_blocking(move || -> Result<_> {
            let strategy = FileStorageStrategy::new()
                .with_format(FormatStrategy::Json)
                .with_load_behavior(LoadBehavior::CreateIfMissing);
            let storage = FileStorage::new(storage_path, create_app_state_migrator(), strategy)?;
            let states: Vec<AppState> = storage.query(APP_STATE_ENTITY)?;
            Ok((storage, states.into_iter().next()))
        })
        .await
        .map_err(|e| SarthiError::internal(format!("Failed to join task: {}", e)))??;

        tracing::debug!(
            path = %path.display(),
            found = initial.is_some(),
            "Opened snapshot storage"
        );

        Ok(Self {
            path,
            cached: Arc::new(Mutex::new(initial)),
            storage: Arc::new(Mutex::new(storage)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Moves an unreadable snapshot aside to `<file>.corrupt` and returns the
    /// new location, so a fresh repository can be opened at `file_path`.
    pub async fn quarantine(file_path: &Path) -> Result<PathBuf> {
        let mut target = file_path.as_os_str().to_owned();
        target.push(".corrupt");
        let target = PathBuf::from(target);
        tokio::fs::rename(file_path, &target).await?;
        tracing::warn!(
            from = %file_path.display(),
            to = %target.display(),
            "Moved unreadable snapshot aside"
        );
        Ok(target)
    }
}

#[async_trait::async_trait]
impl StateRepository for FileStateRepository {
    async fn save_state(&self, state: AppState) -> Result<()> {
        {
            let mut cached = self.cached.lock().await;
            *cached = Some(state.clone());
        }

        // FileStorage writes synchronously
        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || {
            let mut storage = storage.blocking_lock();
            storage
                .update_and_save(APP_STATE_ENTITY, vec![state])
                .map_err(|e| SarthiError::data_access(format!("Failed to save snapshot: {}", e)))
        })
        .await
        .map_err(|e| SarthiError::internal(format!("Failed to join task: {}", e)))??;

        Ok(())
    }

    async fn load_state(&self) -> Result<Option<AppState>> {
        Ok(self.cached.lock().await.clone())
    }

    async fn clear(&self) -> Result<()> {
        // Hold the storage lock so a concurrent save cannot recreate the file
        // between the cache reset and the removal.
        let _storage = self.storage.lock().await;
        *self.cached.lock().await = None;

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
