use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ExplorerError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub data_dir: PathBuf,
    pub user_file: PathBuf,
    pub conversations_file: PathBuf,
    /// Trailing windows reported after the since-first-contact average
    pub window_days: Vec<i64>,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            user_file: PathBuf::from("user.json"),
            conversations_file: PathBuf::from("conversations.json"),
            window_days: vec![30, 7],
            chart: ChartConfig::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 15,
            width: 70,
        }
    }
}

impl ExplorerConfig {
    /// Load from a JSON file, or fall back to defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn user_path(&self) -> PathBuf {
        self.data_dir.join(&self.user_file)
    }

    pub fn conversations_path(&self) -> PathBuf {
        self.data_dir.join(&self.conversations_file)
    }

    pub fn validate(&self) -> Result<(), ExplorerError> {
        if let Some(days) = self.window_days.iter().find(|&&days| days <= 0) {
            return Err(ExplorerError::InvalidArgument(format!(
                "window_days must be positive, got {}",
                days
            )));
        }

        if self.chart.height == 0 || self.chart.width == 0 {
            return Err(ExplorerError::InvalidArgument(
                "chart height and width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
