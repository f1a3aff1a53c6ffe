//! Data-driven tracker content and loaders.
//!
//! This crate houses the configuration a tracker session is built from and
//! provides loaders for RON/TOML data files:
//! - Item catalog with sprite coordinates and progressions (RON)
//! - Keypad zone-item grid (RON)
//! - Location vocabulary, key bindings and panel layout (TOML)
//!
//! Loaded content is checked by [`validate`], which reports problems as
//! warnings instead of refusing to start.
//!
//! All loaders use tracker-core types directly with serde for RON/TOML
//! deserialization.

pub mod settings;
pub mod validate;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use settings::{TrackerContent, TrackerSettings};
pub use validate::{ContentWarning, validate};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, ZoneMapLoader};
