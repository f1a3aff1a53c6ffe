//! Item tracker binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Content (items, keypad grid, settings) via `TrackerBuilder`
//! 2. Frontend (UI) - CLI today
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Environment
//!
//! - `TRACKER_DATA_DIR`: directory holding `items.ron`, `keypad.ron` and
//!   `config.toml`
//! - `TRACKER_LOG_DIR`: log directory override
//! - `RUST_LOG`: log filter
//!
//! ```bash
//! TRACKER_DATA_DIR=./my-seed cargo run -p tracker-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{BootstrapConfig, TrackerBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use client_frontend_core::FrontendApp;

    // 1. Load configuration from environment
    let bootstrap_config = BootstrapConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting tracker");
    tracing::info!("Data directory: {}", bootstrap_config.resolve_data_dir().display());

    // 3. Load content and build the tracker
    let setup = TrackerBuilder::new(bootstrap_config).build()?;
    tracing::info!(
        items = setup.tracker.catalog().len(),
        locations = setup.tracker.locations().len(),
        "Tracker built successfully"
    );

    // 4. Build and run the frontend
    let frontend = CliFrontend::new(frontend_config, cli_config, setup);
    frontend.run().await?;

    tracing::info!("Tracker shutdown complete");
    Ok(())
}
