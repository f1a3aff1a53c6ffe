//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracker_core::{InputState, KeyBindings};

/// Render the footer panel with key bindings help.
///
/// Displays controls for the current keypad state, using the configured
/// binding characters.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &InputState,
    keys: &KeyBindings,
    timer_running: bool,
) {
    let paragraph = Paragraph::new(help_line(state, keys, timer_running))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn help_line(state: &InputState, keys: &KeyBindings, timer_running: bool) -> Line<'static> {
    let spans = match state {
        InputState::Idle => {
            let quit = if timer_running {
                "[Space] Pause to quit"
            } else {
                "[Esc] Quit"
            };
            vec![
                Span::raw("[Click/Wheel] Items | "),
                Span::raw(format!("[{}ZI] Keypad | ", keys.keypad)),
                Span::raw(format!(
                    "[{}/{}/{}/{}] Hints | ",
                    keys.woth, keys.barren, keys.always, keys.note
                )),
                Span::raw("[Ctrl+Z/Y] Undo/Redo | "),
                Span::raw("[Space] Timer | "),
                Span::raw("[Home] Reload | "),
                Span::raw(quit),
            ]
        }
        InputState::AwaitingZoneDigit => vec![
            Span::raw("[1-9] Zone | "),
            Span::raw("[Esc] Cancel"),
        ],
        InputState::AwaitingItemDigit { zone } => vec![
            Span::raw(format!("[1-9] Item in zone {zone} | ")),
            Span::raw("[Esc] Cancel"),
        ],
        InputState::AwaitingHintSlot => vec![
            Span::raw("[1-7] Hint slot | "),
            Span::raw("[Esc] Cancel"),
        ],
        InputState::Text { .. } => vec![
            Span::raw("[Enter] Submit | "),
            Span::raw("[Backspace] Erase | "),
            Span::raw("[Esc] Cancel"),
        ],
    };

    Line::from(spans)
}
