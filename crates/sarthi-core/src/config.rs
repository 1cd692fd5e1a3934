//! Configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section and
//! field has a default, so an empty or partial file is valid.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Name of the persisted snapshot record.
pub const DEFAULT_STORAGE_KEY: &str = "sarthi-store";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SarthiConfig {
    pub storage: StorageConfig,
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Record name; the snapshot file is `<key>.json`
    pub key: String,
    /// Overrides the platform config directory for snapshots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_STORAGE_KEY.to_string(),
            dir: None,
        }
    }
}

/// Artificial latencies of the simulated coach, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub analysis_delay_ms: u64,
    pub review_delay_ms: u64,
    pub chat_delay_ms: u64,
    pub onboarding_delay_ms: u64,
    pub behavioral_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 3000,
            review_delay_ms: 12000,
            chat_delay_ms: 1500,
            onboarding_delay_ms: 1500,
            behavioral_delay_ms: 2000,
        }
    }
}

impl SimulationConfig {
    /// All delays zero; used by tests and `--instant`.
    pub fn instant() -> Self {
        Self {
            analysis_delay_ms: 0,
            review_delay_ms: 0,
            chat_delay_ms: 0,
            onboarding_delay_ms: 0,
            behavioral_delay_ms: 0,
        }
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn review_delay(&self) -> Duration {
        Duration::from_millis(self.review_delay_ms)
    }

    pub fn chat_delay(&self) -> Duration {
        Duration::from_millis(self.chat_delay_ms)
    }

    pub fn onboarding_delay(&self) -> Duration {
        Duration::from_millis(self.onboarding_delay_ms)
    }

    pub fn behavioral_delay(&self) -> Duration {
        Duration::from_millis(self.behavioral_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SarthiConfig = toml::from_str(
            r#"
            [simulation]
            chat_delay_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.chat_delay(), Duration::from_millis(10));
        assert_eq!(config.simulation.review_delay_ms, 12000);
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: SarthiConfig = toml::from_str("").unwrap();
        assert_eq!(config, SarthiConfig::default());
    }
}
