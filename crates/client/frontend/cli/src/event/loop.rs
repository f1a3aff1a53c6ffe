//! Event loop orchestrating user input and rendering.

use anyhow::Result;
use crossterm::event as term_event;
use tokio::time::{self, Duration};

use crate::{
    config::CliConfig,
    input::{Command, InputHandler},
    presentation::{terminal::Tui, ui},
    session::{Flow, Session},
};

/// Event loop owning the session and coordinating UI updates.
///
/// Each tick drains pending terminal events into the session, then redraws
/// if anything happened or the run timer is ticking.
pub struct EventLoop {
    session: Session,
    input: InputHandler,
    cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(session: Session, cli_config: CliConfig) -> Self {
        Self {
            session,
            input: InputHandler::new(),
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<Session> {
        self.render(terminal)?;

        let frame_interval = Duration::from_millis(self.cli_config.ui.frame_interval_ms);
        loop {
            time::sleep(frame_interval).await;

            let (flow, dirty) = self.handle_input_tick()?;
            if flow == Flow::Quit {
                break;
            }
            if dirty || self.session.timer.is_running() {
                self.render(terminal)?;
            }
        }

        Ok(self.session)
    }

    /// Applies every event already queued by the terminal.
    ///
    /// Returns the loop flow and whether a redraw is needed.
    fn handle_input_tick(&mut self) -> Result<(Flow, bool)> {
        let mut dirty = false;

        while term_event::poll(Duration::from_millis(0))? {
            let event = term_event::read()?;
            let command = self.input.handle_event(&event);
            if command == Command::None {
                continue;
            }

            tracing::trace!(?command, "input");
            dirty = true;
            if self.session.apply(command) == Flow::Quit {
                return Ok((Flow::Quit, dirty));
            }
        }

        Ok((Flow::Continue, dirty))
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            session: &self.session,
            ui: &self.cli_config.ui,
        };
        let viewport = ui::render(terminal, &ctx)?;
        self.input.set_viewport(viewport);
        Ok(())
    }
}
