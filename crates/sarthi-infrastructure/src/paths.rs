//! Unified path management for Sarthi files.
//!
//! Paths are resolved via AppPaths from the version-migrate crate unless an
//! explicit base directory is supplied (tests, `--data-dir`).

use std::path::{Path, PathBuf};
use version_migrate::AppPaths;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for sarthi_core::SarthiError {
    fn from(err: PathError) -> Self {
        sarthi_core::SarthiError::config(err.to_string())
    }
}

/// Kinds of files Sarthi keeps on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// The persisted store snapshot, `<key>.json`
    Snapshot,
    /// `config.toml`
    Config,
}

/// A resolved path for one [`ServiceType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePath {
    path: PathBuf,
}

impl ServicePath {
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

/// Path resolver for Sarthi.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/sarthi/            # Base directory (AppPaths default)
/// ├── config.toml              # Application configuration
/// └── sarthi-store.json        # Persisted store snapshot (name = storage key)
/// ```
#[derive(Debug, Clone, Default)]
pub struct SarthiPaths {
    base_dir: Option<PathBuf>,
    storage_key: Option<String>,
}

impl SarthiPaths {
    /// Creates a resolver. `None` uses the platform config directory.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self {
            base_dir,
            storage_key: None,
        }
    }

    /// Overrides the snapshot file stem (defaults to `sarthi-store`).
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    fn app_paths() -> AppPaths {
        AppPaths::new("sarthi")
    }

    /// Returns the base directory all Sarthi files live in.
    pub fn base_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::app_paths()
                .config_dir()
                .map_err(|_| PathError::HomeDirNotFound),
        }
    }

    pub fn get_path(&self, service: ServiceType) -> Result<ServicePath, PathError> {
        let base = self.base_dir()?;
        let path = match service {
            ServiceType::Snapshot => {
                let key = self
                    .storage_key
                    .as_deref()
                    .unwrap_or(sarthi_core::config::DEFAULT_STORAGE_KEY);
                base.join(format!("{key}.json"))
            }
            ServiceType::Config => base.join("config.toml"),
        };
        Ok(ServicePath { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_path_uses_storage_key() {
        let paths = SarthiPaths::new(Some(PathBuf::from("/tmp/sarthi"))).with_storage_key("alt");
        let snapshot = paths.get_path(ServiceType::Snapshot).unwrap();
        assert_eq!(snapshot.into_path_buf(), PathBuf::from("/tmp/sarthi/alt.json"));
    }

    #[test]
    fn test_default_layout() {
        let paths = SarthiPaths::new(Some(PathBuf::from("/data")));
        assert_eq!(
            paths.get_path(ServiceType::Snapshot).unwrap().as_path(),
            Path::new("/data/sarthi-store.json")
        );
        assert_eq!(
            paths.get_path(ServiceType::Config).unwrap().as_path(),
            Path::new("/data/config.toml")
        );
    }

    #[test]
    fn test_platform_dir_resolves() {
        let dir = SarthiPaths::new(None).base_dir();
        if let Ok(dir) = dir {
            assert!(dir.ends_with("sarthi"));
        }
    }
}
