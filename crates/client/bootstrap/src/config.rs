//! Bootstrap configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Relative location of the shipped content inside the workspace.
pub const DEFAULT_DATA_DIR: &str = "crates/tracker/content/data";

/// Configuration required to locate tracker content.
#[derive(Clone, Debug, Default)]
pub struct BootstrapConfig {
    /// Content directory override. `None` searches the default locations.
    pub data_dir: Option<PathBuf>,
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TRACKER_DATA_DIR` - Directory holding `items.ron`, `keypad.ron`
    ///   and `config.toml` (default: the shipped data directory)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("TRACKER_DATA_DIR"),
        }
    }

    /// Content directory to load from.
    ///
    /// Without an override this tries, in order:
    /// 1. Relative to the current executable (`target/<profile>/..`)
    /// 2. Relative to the current directory
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        let from_exe = env::current_exe().ok().and_then(|exe| {
            exe.parent()
                .and_then(|p| p.parent())
                .and_then(|p| p.parent())
                .map(|root| root.join(DEFAULT_DATA_DIR))
        });

        match from_exe {
            Some(dir) if dir.is_dir() => dir,
            _ => env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(DEFAULT_DATA_DIR),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
