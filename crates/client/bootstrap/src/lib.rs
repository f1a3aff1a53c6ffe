//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, content sourcing, and tracker assembly that
//! can be reused by the CLI or any other front-end crate.
pub mod builder;
pub mod config;
pub mod source;

pub use builder::{TrackerBuilder, TrackerSetup, reload};
pub use config::BootstrapConfig;
pub use source::{ContentSource, DirectoryContentSource, StaticContentSource};
