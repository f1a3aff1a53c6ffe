//! Event handling for CLI client.
//!
//! This module contains the event loop that feeds terminal input into the
//! session and redraws the UI.

mod r#loop;

pub use r#loop::EventLoop;
