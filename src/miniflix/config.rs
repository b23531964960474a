use crate::error::{MiniflixError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FEATURED_COUNT: usize = 5;
const DEFAULT_TRENDING_COUNT: usize = 8;

/// Configuration for miniflix, stored as config.json next to the posters.
///
/// The .json extension is not a poster format, so the file never shows up
/// in a scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MiniflixConfig {
    /// How many posters the Home view features
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,

    /// How many posters the Trending view ranks
    #[serde(default = "default_trending_count")]
    pub trending_count: usize,
}

fn default_featured_count() -> usize {
    DEFAULT_FEATURED_COUNT
}

fn default_trending_count() -> usize {
    DEFAULT_TRENDING_COUNT
}

impl Default for MiniflixConfig {
    fn default() -> Self {
        Self {
            featured_count: DEFAULT_FEATURED_COUNT,
            trending_count: DEFAULT_TRENDING_COUNT,
        }
    }
}

impl MiniflixConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MiniflixError::Io)?;
        let config: MiniflixConfig =
            serde_json::from_str(&content).map_err(MiniflixError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MiniflixError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MiniflixError::Serialization)?;
        fs::write(config_path, content).map_err(MiniflixError::Io)?;
        Ok(())
    }
}
