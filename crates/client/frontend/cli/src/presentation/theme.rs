//! Ratatui styling for the tracker.
//!
//! Sprite sheets become colors: collected items are bright, missing ones dim.
use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};
use tracker_core::{Sheet, TextSize};

/// Consistent color scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct Theme;

impl Theme {
    pub fn sprite(&self, sheet: Sheet) -> Style {
        match sheet {
            Sheet::Enabled => Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            Sheet::Disabled => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        }
    }

    pub fn label(&self, sheet: Sheet, size: TextSize) -> Style {
        let base = self.sprite(sheet);
        match size {
            TextSize::Capacity => base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
            TextSize::Temple => base.fg(Color::LightCyan),
        }
    }

    /// Labels drawn outside any sprite, e.g. counters in the slot to the right.
    pub fn free_label(&self, size: TextSize) -> Style {
        match size {
            TextSize::Capacity => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            TextSize::Temple => Style::default().fg(Color::LightCyan),
        }
    }

    pub fn zone_digit(&self) -> Style {
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default().bg(Color::Blue)
    }

    pub fn prompt(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timer(&self, running: bool) -> Style {
        if running {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn section_title(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Debug => Style::default().fg(Color::DarkGray),
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}
