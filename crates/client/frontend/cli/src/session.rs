//! Application state behind the terminal: tracker, run timer and status log.
use std::sync::Arc;

use client_bootstrap::{ContentSource, TrackerSetup, reload};
use client_frontend_core::{FrontendConfig, MessageEntry, MessageLevel, MessageLog, RunTimer};
use tracker_content::TrackerSettings;
use tracker_core::Tracker;

use crate::input::Command;

/// Whether the event loop keeps running after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything a frame is drawn from.
pub struct Session {
    pub tracker: Tracker,
    pub timer: RunTimer,
    pub messages: MessageLog,
    pub settings: TrackerSettings,
    source: Arc<dyn ContentSource>,
}

impl Session {
    pub fn new(setup: TrackerSetup, config: &FrontendConfig) -> Self {
        let TrackerSetup {
            settings,
            source,
            tracker,
            ..
        } = setup;

        let mut messages =
            MessageLog::new(config.messages.capacity).with_debug(config.messages.show_debug);
        messages.push_text(format!("Loaded {}", source.describe()));

        Self {
            tracker,
            timer: RunTimer::new(),
            messages,
            settings,
            source,
        }
    }

    /// Applies one command.
    ///
    /// While the tracker is taking text, Space and Escape belong to it. Escape
    /// only quits when nothing is pending and the timer is stopped, so a run
    /// cannot be closed by accident.
    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::ForceQuit => return Flow::Quit,
            Command::Escape => {
                if !self.timer.is_running() && !self.tracker.eat_input() {
                    return Flow::Quit;
                }
                self.tracker.cancel();
            }
            Command::Reload => self.reload(),
            Command::Submit => self.tracker.submit(),
            Command::Space => {
                if self.tracker.eat_input() {
                    self.tracker.input([' ']);
                } else {
                    self.timer.toggle();
                    let state = if self.timer.is_running() {
                        "started"
                    } else {
                        "stopped"
                    };
                    self.log(MessageLevel::Debug, format!("Timer {state}"));
                }
            }
            Command::ResetTimer => {
                self.timer.reset();
                self.log(MessageLevel::Debug, "Timer reset");
            }
            Command::Backspace => self.tracker.backspace(),
            Command::Undo => {
                if !self.tracker.undo() {
                    self.log(MessageLevel::Debug, "Nothing to undo");
                }
            }
            Command::Redo => {
                if !self.tracker.redo() {
                    self.log(MessageLevel::Debug, "Nothing to redo");
                }
            }
            Command::Text(ch) => self.tracker.input([ch]),
            Command::ClickLeft(at) => {
                self.tracker.click_left(at.x, at.y);
            }
            Command::ClickRight(at) => {
                self.tracker.click_right(at.x, at.y);
            }
            Command::Wheel { at, up } => {
                self.tracker.wheel(at.x, at.y, up);
            }
            Command::Resize | Command::None => {}
        }

        Flow::Continue
    }

    /// Re-reads content and resets the tracker. Refused while the timer runs;
    /// a failed load keeps the current state.
    fn reload(&mut self) {
        if self.timer.is_running() {
            self.log(MessageLevel::Warning, "Stop the timer before reloading");
            return;
        }

        match reload(&mut self.tracker, self.source.as_ref()) {
            Ok(()) => {
                tracing::info!(source = %self.source.describe(), "content reloaded");
                self.log(MessageLevel::Info, "Reloaded content");
            }
            Err(err) => {
                tracing::error!("Reload failed: {err:#}");
                self.log(MessageLevel::Error, format!("Reload failed: {err:#}"));
            }
        }
    }

    fn log(&mut self, level: MessageLevel, text: impl Into<String>) {
        let at = Some(self.timer.elapsed());
        self.messages.push(MessageEntry::new(text, at, level));
    }
}
