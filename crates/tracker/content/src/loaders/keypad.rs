//! Keypad zone-item grid loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracker_core::ZoneItemMap;

use crate::loaders::{LoadResult, read_file};

/// Grid structure for RON files: one row per zone digit, one column per
/// item digit, `""` for unused cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct KeypadRon {
    zones: ZoneItemMap,
}

/// Loader for the zone-item map from RON files.
pub struct ZoneMapLoader;

impl ZoneMapLoader {
    pub fn load(path: &Path) -> LoadResult<ZoneItemMap> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse keypad from {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<ZoneItemMap> {
        let data: KeypadRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse keypad RON: {}", e))?;

        Ok(data.zones)
    }
}
