use super::schema::AssistantConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

const LOCAL_CONFIG: &str = "gogo.yaml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Candidate files in lookup order: `./gogo.yaml`, then
    /// `~/.gogo/config.yaml` when a home directory is known.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".").join(LOCAL_CONFIG)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".gogo").join("config.yaml"));
        }
        paths
    }

    /// First existing candidate wins; defaults when none exists.
    pub async fn load_default() -> Result<AssistantConfig, ConfigError> {
        for path in Self::search_paths() {
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                debug!(path = %path.display(), "loading config");
                return Self::load_from(&path).await;
            }
        }
        debug!("no config file found, using defaults");
        Ok(AssistantConfig::default())
    }

    pub async fn load_from(path: &Path) -> Result<AssistantConfig, ConfigError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
        Self::parse(&content)
    }

    /// An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<AssistantConfig, ConfigError> {
        if content.trim().is_empty() {
            return Ok(AssistantConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
