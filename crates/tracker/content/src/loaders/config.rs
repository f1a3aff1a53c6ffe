//! Tracker settings loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::settings::TrackerSettings;

/// Loader for tracker settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file. Missing sections use defaults.
    pub fn load(path: &Path) -> LoadResult<TrackerSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config from {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<TrackerSettings> {
        let settings: TrackerSettings = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(settings)
    }
}
