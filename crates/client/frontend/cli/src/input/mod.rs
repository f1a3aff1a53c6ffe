//! Input processing for the CLI client.
//!
//! This module owns the terminal-event-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events. Mouse positions are translated into
//! tracker pixels here.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracker_core::Point;

use crate::presentation::viewport::Viewport;

/// High-level outcome of processing a terminal event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Cancel pending input, or quit when nothing is pending.
    Escape,
    /// Quit unconditionally (Ctrl+C).
    ForceQuit,
    /// Reload content from disk and reset the tracker.
    Reload,
    Submit,
    /// Space is text while typing and the timer toggle otherwise.
    Space,
    ResetTimer,
    Backspace,
    Undo,
    Redo,
    Text(char),
    ClickLeft(Point),
    ClickRight(Point),
    Wheel { at: Point, up: bool },
    /// Terminal size changed; redraw.
    Resize,
    /// No meaningful command was produced.
    None,
}

/// Translates terminal events into tracker commands.
#[derive(Debug, Default)]
pub struct InputHandler {
    viewport: Option<Viewport>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the cell area the item tracker was last drawn into.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    pub fn handle_event(&self, event: &Event) -> Command {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => Command::Resize,
            _ => Command::None,
        }
    }

    fn handle_key(&self, key: &KeyEvent) -> Command {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Command::ForceQuit,
                KeyCode::Char('z') => Command::Undo,
                KeyCode::Char('y') => Command::Redo,
                _ => Command::None,
            };
        }

        match key.code {
            KeyCode::Esc => Command::Escape,
            KeyCode::Home => Command::Reload,
            KeyCode::Enter => Command::Submit,
            KeyCode::Char(' ') => Command::Space,
            KeyCode::Delete => Command::ResetTimer,
            KeyCode::Backspace => Command::Backspace,
            KeyCode::Char(ch) => Command::Text(ch),
            _ => Command::None,
        }
    }

    fn handle_mouse(&self, mouse: &MouseEvent) -> Command {
        let Some(at) = self
            .viewport
            .and_then(|viewport| viewport.to_pixel(mouse.column, mouse.row))
        else {
            return Command::None;
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Command::ClickLeft(at),
            MouseEventKind::Down(MouseButton::Right) => Command::ClickRight(at),
            MouseEventKind::ScrollUp => Command::Wheel { at, up: true },
            MouseEventKind::ScrollDown => Command::Wheel { at, up: false },
            _ => Command::None,
        }
    }
}
