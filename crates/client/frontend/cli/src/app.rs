//! Glue code tying the tracker session and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use crate::session::Session;
use client_bootstrap::TrackerSetup;
use client_frontend_core::{FrontendApp, FrontendConfig};

/// Terminal frontend for one tracker run.
pub struct CliFrontend {
    session: Session,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
        setup: TrackerSetup,
    ) -> Self {
        Self {
            session: Session::new(setup, &frontend_config),
            cli_config,
        }
    }

    pub async fn execute(self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let CliFrontend {
            session,
            cli_config,
        } = self;

        let session = EventLoop::new(session, cli_config).run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            elapsed = %session.timer.display(),
            undo_depth = session.tracker.history().undo_len(),
            "CLI client exiting"
        );

        Ok(())
    }
}

#[async_trait]
impl FrontendApp for CliFrontend {
    async fn run(self) -> Result<()> {
        self.execute().await
    }
}
