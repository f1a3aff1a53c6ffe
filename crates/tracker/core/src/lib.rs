//! Deterministic state engine for a game-completion item tracker.
//!
//! `tracker-core` owns the canonical rules of the tracker: item upgrade and
//! downgrade transitions, the keypad addressing scheme, undo/redo history and
//! hint bookkeeping. All state mutation flows through [`Tracker`], and
//! frontends read back a [`RenderFrame`] describing what to draw.
pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hints;
pub mod history;
pub mod input;
pub mod item;
pub mod render;
pub mod tracker;
pub mod zone_map;

pub use catalog::ItemCatalog;
pub use config::{KeyBindings, TrackerLayout};
pub use error::{ErrorSeverity, LookupError, TrackerError};
pub use geometry::{Point, Rect};
pub use hints::{AlwaysHint, HintLedger, HintTarget, Locations};
pub use history::{History, HistoryEntry};
pub use input::{InputCommand, InputState, KeypadInput};
pub use item::{Item, LabelAnchor, SpriteVariant, Temple};
pub use render::{Background, InputView, RenderFrame, Sheet, SpriteDraw, TextLabel, TextSize};
pub use tracker::Tracker;
pub use zone_map::ZoneItemMap;
