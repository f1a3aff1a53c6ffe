//! Reusable UI widgets for the terminal interface.
//!
//! Each widget is a pure render function over borrowed state.
pub mod footer;
pub mod hints;
pub mod items;
pub mod messages;
pub mod timer;
