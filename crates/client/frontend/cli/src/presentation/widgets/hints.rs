//! Hint panel widget.
use client_frontend_core::HintPanel;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::Theme;

/// Render every hint section as a titled block of lines.
///
/// Sections with no entries still show their title so the layout stays put.
pub fn render(frame: &mut Frame, area: Rect, panel: &HintPanel, theme: &Theme) {
    let mut lines = Vec::new();
    for (index, section) in panel.sections.iter().enumerate() {
        if index > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(section.title, theme.section_title())));
        lines.extend(
            section
                .lines
                .iter()
                .map(|line| Line::raw(format!("  {line}"))),
        );
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Hints"));

    frame.render_widget(paragraph, area);
}
