//! Terminal UI frontend for the item tracker.
//!
//! This crate provides a terminal-based user interface for a tracker session.
//! It implements the `client_frontend_core::FrontendApp` trait.
//!
//! # Architecture
//!
//! The tracker draws in pixel coordinates. This frontend scales that layout
//! onto terminal cells for drawing and maps mouse cells back to pixels before
//! handing clicks to the tracker, so the tracker never knows it runs in a
//! terminal.

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod session;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use input::{Command, InputHandler};
pub use session::{Flow, Session};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
