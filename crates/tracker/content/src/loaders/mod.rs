//! Content loaders for reading tracker data from files.
//!
//! Each loader parses one file into tracker-core types; [`ContentFactory`]
//! ties them to a data directory.

pub mod config;
pub mod factory;
pub mod items;
pub mod keypad;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use items::ItemLoader;
pub use keypad::ZoneMapLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
