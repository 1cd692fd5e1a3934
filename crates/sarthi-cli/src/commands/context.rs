//! Per-invocation setup: configuration, paths, logging and the session.

use anyhow::{Context as _, Result};
use colored::Colorize;
use sarthi_application::SarthiSession;
use sarthi_core::config::{SarthiConfig, SimulationConfig};
use sarthi_infrastructure::{ConfigService, SarthiPaths};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub struct Context {
    config: SarthiConfig,
    config_service: ConfigService,
    snapshot_paths: SarthiPaths,
    /// Why `config.toml` was ignored, if it was
    config_error: Option<String>,
}

impl Context {
    /// Resolves paths and reads `config.toml`.
    ///
    /// `data_dir` wins over `[storage] dir`, which wins over the platform
    /// config directory. A `config.toml` that cannot be parsed is replaced by
    /// the defaults and kept for [`report_config_error`](Self::report_config_error).
    pub fn load(data_dir: Option<PathBuf>, instant: bool) -> Result<Self> {
        let config_service = ConfigService::new(&SarthiPaths::new(data_dir.clone()))
            .context("Failed to locate the Sarthi config directory")?;
        let (mut config, config_error) = match config_service.get_config() {
            Ok(config) => (config, None),
            Err(e) => (
                SarthiConfig::default(),
                Some(format!("{}: {e}", config_service.path().display())),
            ),
        };
        if instant {
            config.simulation = SimulationConfig::instant();
        }

        let snapshot_dir = data_dir.or_else(|| config.storage.dir.clone());
        let snapshot_paths =
            SarthiPaths::new(snapshot_dir).with_storage_key(config.storage.key.clone());

        Ok(Self {
            config,
            config_service,
            snapshot_paths,
            config_error,
        })
    }

    pub fn config_error(&self) -> Option<&str> {
        self.config_error.as_deref()
    }

    /// Tells the user that `config.toml` was ignored.
    pub fn report_config_error(&self) {
        if let Some(error) = &self.config_error {
            tracing::warn!(%error, "Ignoring config file");
            eprintln!(
                "{}",
                format!("Warning: ignoring invalid config ({error}); using defaults").yellow()
            );
        }
    }

    pub fn config(&self) -> &SarthiConfig {
        &self.config
    }

    pub fn config_service(&self) -> &ConfigService {
        &self.config_service
    }

    pub fn snapshot_paths(&self) -> &SarthiPaths {
        &self.snapshot_paths
    }

    pub async fn open_session(&self) -> Result<SarthiSession> {
        SarthiSession::open_file(&self.snapshot_paths, self.config.clone()).await
    }
}

/// Flushes pending writes and reports any that failed.
pub async fn close(session: SarthiSession) {
    let report = session.shutdown().await;
    if report.failed > 0 {
        eprintln!(
            "{}",
            "Warning: changes could not be saved; see the log for details.".yellow()
        );
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides `filter`.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Converts a 1-based number typed by the user into an index.
pub fn to_index(number: usize, what: &str) -> Result<usize> {
    number
        .checked_sub(1)
        .with_context(|| format!("{what} numbers start at 1"))
}
