//! Where tracker content comes from.
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracker_content::{ContentFactory, TrackerContent};

/// Produces a full content bundle on demand.
///
/// Called once at startup and again for every reload, so implementations
/// must return fresh data each time.
pub trait ContentSource: Send + Sync {
    fn load(&self) -> Result<TrackerContent>;

    /// Human-readable origin, for log and status messages.
    fn describe(&self) -> String;
}

/// Content source reading data files from a directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── keypad.ron
/// ```
#[derive(Clone, Debug)]
pub struct DirectoryContentSource {
    data_dir: PathBuf,
}

impl DirectoryContentSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl ContentSource for DirectoryContentSource {
    fn load(&self) -> Result<TrackerContent> {
        if !self.data_dir.is_dir() {
            anyhow::bail!(
                "Content data directory not found: {} (set TRACKER_DATA_DIR to override)",
                self.data_dir.display()
            );
        }

        ContentFactory::new(&self.data_dir).load()
    }

    fn describe(&self) -> String {
        self.data_dir.display().to_string()
    }
}

/// Content source returning a fixed bundle. Useful for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct StaticContentSource {
    content: TrackerContent,
}

impl StaticContentSource {
    pub fn new(content: TrackerContent) -> Self {
        Self { content }
    }
}

impl ContentSource for StaticContentSource {
    fn load(&self) -> Result<TrackerContent> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        "built-in content".to_string()
    }
}
