//! Timer bar: run time on the left, pending tracker input on the right.
use client_frontend_core::RunTimer;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracker_core::InputView;

use crate::presentation::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    timer: &RunTimer,
    input: Option<&InputView>,
    theme: &Theme,
) {
    let mut spans = vec![Span::styled(
        timer.display(),
        theme.timer(timer.is_running()),
    )];

    if let Some(input) = input {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(format!("{}: ", input.prompt), theme.prompt()));
        spans.push(Span::raw(input.buffer.as_str()));
        spans.push(Span::styled("_", theme.prompt()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Timer"));

    frame.render_widget(paragraph, area);
}
