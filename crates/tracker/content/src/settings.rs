//! Session-level settings and the bundle a tracker is built from.
use tracker_core::{Item, ItemCatalog, KeyBindings, Locations, TrackerLayout, ZoneItemMap};

/// Contents of `config.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerSettings {
    /// Location names accepted by woth/barren hints.
    pub locations: Vec<String>,
    pub keys: KeyBindings,
    pub layout: TrackerLayout,
}

impl TrackerSettings {
    pub fn locations(&self) -> Locations {
        Locations::new(self.locations.clone())
    }
}

/// Everything loaded from one data directory.
#[derive(Clone, Debug, Default)]
pub struct TrackerContent {
    pub items: Vec<Item>,
    pub zone_item_map: ZoneItemMap,
    pub settings: TrackerSettings,
}

impl TrackerContent {
    pub fn catalog(&self) -> ItemCatalog {
        ItemCatalog::new(self.items.clone())
    }
}
