//! Configuration service implementation.
//!
//! Loads [`SarthiConfig`] from `config.toml` in the Sarthi base directory.
//! A missing file yields the defaults. An unreadable one is an error; the
//! caller decides whether to fall back.

use crate::paths::{SarthiPaths, ServiceType};
use sarthi_core::config::SarthiConfig;
use sarthi_core::error::{Result, SarthiError};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<SarthiConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &SarthiPaths) -> Result<Self> {
        let path = paths.get_path(ServiceType::Config)?.into_path_buf();
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// Only a successful load is cached; a broken file is re-read (and
    /// reported again) on the next call.
    pub fn get_config(&self) -> Result<SarthiConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load().map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to load config");
            e
        })?;

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Reads the file without caching. Missing file means defaults.
    pub fn load(&self) -> Result<SarthiConfig> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SarthiConfig::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the default configuration unless a file already exists.
    ///
    /// Returns `true` when a file was written.
    pub fn write_default(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&SarthiConfig::default())?;
        std::fs::write(&self.path, content)
            .map_err(|e| SarthiError::io(format!("{}: {}", self.path.display(), e)))?;
        self.invalidate_cache();
        Ok(true)
    }
}
