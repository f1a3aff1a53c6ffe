//! Builds the tracker and settings bundle used by front-ends.
use std::sync::Arc;

use anyhow::Result;
use tracker_content::{TrackerContent, TrackerSettings};
use tracker_core::Tracker;

use crate::config::BootstrapConfig;
use crate::source::{ContentSource, DirectoryContentSource};

/// Builder that assembles tracker state and settings for clients.
pub struct TrackerBuilder {
    config: BootstrapConfig,
    source: Arc<dyn ContentSource>,
}

impl TrackerBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        let default_source = DirectoryContentSource::new(config.resolve_data_dir());
        Self {
            config,
            source: Arc::new(default_source),
        }
    }

    /// Provide a custom content source (e.g., in-memory content for tests).
    pub fn content_source(mut self, source: impl ContentSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    pub fn build(self) -> Result<TrackerSetup> {
        let content = self.source.load()?;
        tracing::info!(source = %self.source.describe(), "building tracker");

        let TrackerContent {
            items,
            zone_item_map,
            settings,
        } = content;
        let tracker = Tracker::new(
            items.into(),
            zone_item_map,
            settings.locations(),
            settings.keys.clone(),
        );

        Ok(TrackerSetup {
            config: self.config,
            settings,
            source: self.source,
            tracker,
        })
    }
}

pub struct TrackerSetup {
    pub config: BootstrapConfig,
    pub settings: TrackerSettings,
    pub source: Arc<dyn ContentSource>,
    pub tracker: Tracker,
}

/// Reloads items and the keypad grid from `source` and resets the tracker.
///
/// The reload is all-or-nothing: on error the tracker is left untouched.
pub fn reload(tracker: &mut Tracker, source: &dyn ContentSource) -> Result<()> {
    let content = source.load()?;
    tracker.reset(content.items.into(), content.zone_item_map);
    Ok(())
}
