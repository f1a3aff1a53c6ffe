//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Log directory override. `None` uses the platform cache directory.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Input poll and redraw interval (default: 16)
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 5)
    /// - `CLI_PIXELS_PER_COLUMN` - Tracker pixels per terminal column (default: 7)
    /// - `CLI_PIXELS_PER_ROW` - Tracker pixels per terminal row (default: 21)
    /// - `TRACKER_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.ui.frame_interval_ms = interval.max(1);
        }

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        if let Some(px) = read_env::<u16>("CLI_PIXELS_PER_COLUMN") {
            config.ui.pixels_per_column = px.max(1);
        }

        if let Some(px) = read_env::<u16>("CLI_PIXELS_PER_ROW") {
            config.ui.pixels_per_row = px.max(1);
        }

        config.log_dir = read_env::<PathBuf>("TRACKER_LOG_DIR");

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub frame_interval_ms: u64,
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Horizontal tracker pixels covered by one terminal cell.
    pub pixels_per_column: u16,
    /// Vertical tracker pixels covered by one terminal cell.
    pub pixels_per_row: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            message_panel_height: 5,
            // A 42px grid slot becomes 6x2 cells.
            pixels_per_column: 7,
            pixels_per_row: 21,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
