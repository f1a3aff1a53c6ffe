//! Frame composition.
//!
//! This module provides the main render entry point that lays out all widgets
//! and reports where the item grid ended up, so mouse input can be mapped
//! back to tracker pixels.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

use crate::{
    config::UiConfig,
    presentation::{terminal::Tui, theme::Theme, viewport::Viewport, widgets},
    session::Session,
};
use client_frontend_core::HintPanel;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub session: &'a Session,
    pub ui: &'a UiConfig,
}

/// Draws one frame and returns the viewport of the item grid.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<Viewport> {
    let mut viewport = None;
    terminal.draw(|frame| viewport = Some(render_frame(frame, ctx)))?;

    Ok(viewport.unwrap_or_else(|| {
        Viewport::new(
            Rect::default(),
            ctx.ui.pixels_per_column,
            ctx.ui.pixels_per_row,
        )
    }))
}

fn render_frame(frame: &mut Frame, ctx: &RenderContext) -> Viewport {
    let theme = Theme;
    let session = ctx.session;
    let tracker = &session.tracker;
    let view = tracker.render();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                              // Items and hints
            Constraint::Length(3),                           // Timer and prompt
            Constraint::Length(ctx.ui.message_panel_height), // Messages
            Constraint::Length(3),                           // Footer
        ])
        .split(frame.area());

    let tracker_pixels = session.settings.layout.item_tracker;
    let (grid_width, grid_height) = Viewport::cells_for(
        tracker_pixels.width,
        tracker_pixels.height,
        ctx.ui.pixels_per_column,
        ctx.ui.pixels_per_row,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(grid_width.saturating_add(2)), // Items
            Constraint::Min(0),                               // Hints
        ])
        .split(rows[0]);

    let block = Block::default().borders(Borders::ALL).title("Items");
    let inner = block.inner(columns[0]);
    frame.render_widget(block, columns[0]);

    let grid_area = Rect::new(
        inner.x,
        inner.y,
        grid_width.min(inner.width),
        grid_height.min(inner.height),
    );
    let viewport = Viewport::new(grid_area, ctx.ui.pixels_per_column, ctx.ui.pixels_per_row);
    widgets::items::render(frame, &viewport, &view, tracker.catalog(), &theme);

    widgets::hints::render(frame, columns[1], &HintPanel::from_ledger(view.hints), &theme);
    widgets::timer::render(frame, rows[1], &session.timer, view.input.as_ref(), &theme);

    let recent_messages: Vec<_> = session
        .messages
        .recent(ctx.ui.message_panel_height as usize)
        .cloned()
        .collect();
    widgets::messages::render(
        frame,
        rows[2],
        &recent_messages,
        ctx.ui.message_panel_height,
        &theme,
    );

    widgets::footer::render(
        frame,
        rows[3],
        tracker.keypad().state(),
        tracker.keypad().bindings(),
        session.timer.is_running(),
    );

    viewport
}
