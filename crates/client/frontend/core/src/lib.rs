//! Cross-frontend primitives for presenting the tracker.
//!
//! Houses message logging, the run timer, and view-model types that both the
//! CLI and future graphical clients can reuse.
pub mod config;
pub mod frontend;
pub mod message;
pub mod timer;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use frontend::FrontendApp;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use timer::{RunTimer, format_duration};
pub use view_model::{HintPanel, HintSection};
