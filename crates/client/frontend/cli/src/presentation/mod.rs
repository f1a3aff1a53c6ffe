//! Terminal rendering: setup, theme, layout and widgets.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod viewport;
pub mod widgets;

pub use terminal::Tui;
pub use theme::Theme;
pub use viewport::Viewport;
