use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::schema::{ConfigWarning, RecallConfig};

/// Loads the transcript recovery configuration.
///
/// Validation warnings are kept rather than logged, since the loader runs
/// before the CLI has installed a tracing subscriber.
pub struct ConfigLoader {
    config: RecallConfig,
    config_path: PathBuf,
    warnings: Vec<ConfigWarning>,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > RECALL_CONFIG env > ~/.recall/recall.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("RECALL_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".recall")
            .join("recall.toml")
    }

    /// Load the config from disk, falling back to defaults.
    ///
    /// An explicitly requested path must exist; the default location may be absent.
    pub fn load(path: Option<&Path>) -> recall_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            Self::parse_file(&config_path)?
        } else if path.is_some() {
            return Err(recall_core::RecallError::Config(format!(
                "config file not found: {}",
                config_path.display()
            )));
        } else {
            debug!(?config_path, "config file not found, using defaults");
            RecallConfig::default()
        };

        let config = Self::apply_env_overrides(config);
        let warnings = config.validate().map_err(recall_core::RecallError::Config)?;

        Ok(Self {
            config,
            config_path,
            warnings,
        })
    }

    /// Get a snapshot of the current config.
    pub fn get(&self) -> RecallConfig {
        self.config.clone()
    }

    /// Path the config was resolved from (may not exist).
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Non-fatal validation findings from the last load.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    fn parse_file(config_path: &Path) -> recall_core::Result<RecallConfig> {
        let raw = std::fs::read_to_string(config_path)?;
        toml::from_str::<RecallConfig>(&raw).map_err(|e| {
            recall_core::RecallError::Config(format!(
                "failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    /// Apply env var overrides (RECALL_TRANSCRIPTS_DIR, RECALL_LOG_LEVEL, RECALL_LOG_FORMAT).
    fn apply_env_overrides(config: RecallConfig) -> RecallConfig {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Empty values are ignored.
    pub fn apply_overrides(
        mut config: RecallConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> RecallConfig {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = lookup("RECALL_TRANSCRIPTS_DIR") {
            config.transcripts.dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("RECALL_LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Some(v) = lookup("RECALL_LOG_FORMAT") {
            config.logging.format = v;
        }
        config
    }
}
