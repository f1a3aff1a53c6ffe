//! Content factory for building a tracker session from data files.

use std::path::{Path, PathBuf};

use tracker_core::{Item, ZoneItemMap};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, ZoneMapLoader};
use crate::settings::{TrackerContent, TrackerSettings};
use crate::validate;

/// Content factory that loads all tracker content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── keypad.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load settings from `config.toml`.
    pub fn load_settings(&self) -> LoadResult<TrackerSettings> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load the zone-item grid from `keypad.ron`.
    pub fn load_zone_item_map(&self) -> LoadResult<ZoneItemMap> {
        ZoneMapLoader::load(&self.data_dir.join("keypad.ron"))
    }

    /// Load every file and validate the result.
    ///
    /// Fails on the first unreadable or malformed file. Validation findings
    /// are logged and never fail the load.
    pub fn load(&self) -> LoadResult<TrackerContent> {
        let content = TrackerContent {
            items: self.load_items()?,
            zone_item_map: self.load_zone_item_map()?,
            settings: self.load_settings()?,
        };

        let warnings = validate::validate(&content.items, &content.zone_item_map);
        validate::report(&warnings);
        tracing::info!(
            data_dir = %self.data_dir.display(),
            items = content.items.len(),
            locations = content.settings.locations.len(),
            warnings = warnings.len(),
            "loaded tracker content"
        );

        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
