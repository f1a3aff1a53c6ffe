//! Collectible items and their upgrade/downgrade ratchet.
//!
//! # Progression kinds
//!
//! An item is exactly one of:
//! - **Simple**: only the `enabled` flag.
//! - **Stepped**: `enabled` plus an upgrade index into `capacity_progression`
//!   (displayed numbers) and/or `item_progression` (sprite variants).
//! - **Countable**: `enabled` plus a counter bounded by `[0, count_max]`.
//!
//! `count_max != 0` is the sole discriminator for countable items and a
//! non-empty `capacity_progression` the sole discriminator for "has
//! capacity". When configuration sets both, counting wins for transitions.
//!
//! Medallions additionally carry a [`Temple`] label that cycles independently
//! of the enabled/upgrade state.
mod temple;

pub use temple::Temple;

use crate::geometry::{Point, Rect};

/// Size of one slot of the background grid, in pixels.
pub const GRID_SIZE: i32 = 42;
pub const SPRITE_WIDTH: i32 = 34;
pub const SPRITE_HEIGHT: i32 = SPRITE_WIDTH;

/// Item X/Y origin is the slot corner adjusted by these margins.
pub const MARGIN_TOP: i32 = (GRID_SIZE - SPRITE_HEIGHT) / 2;
pub const MARGIN_LEFT: i32 = (GRID_SIZE - SPRITE_WIDTH) / 2;

/// Sprite-sheet origin of one tier of an item progression.
///
/// Variants only borrow sheet coordinates; they never carry state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteVariant {
    pub sheet_x: i32,
    pub sheet_y: i32,
}

impl SpriteVariant {
    pub const fn new(sheet_x: i32, sheet_y: i32) -> Self {
        Self { sheet_x, sheet_y }
    }
}

/// Where the capacity/count number is drawn relative to the sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelAnchor {
    /// Bottom-left corner of the sprite.
    #[default]
    Below,
    /// Centered on the grid slot to the right of the item.
    RightSlot,
}

/// A single collectible and its progression state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,

    /// Position over the background, relative to the tracker origin.
    pub x: i32,
    pub y: i32,

    /// Origin in the sprite sheet.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sheet_x: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sheet_y: i32,

    /// Both can be set if they are of the same length.
    #[cfg_attr(feature = "serde", serde(default))]
    pub capacity_progression: Vec<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_progression: Vec<SpriteVariant>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub count_max: i32,
    #[cfg_attr(feature = "serde", serde(default = "Item::default_count_step"))]
    pub count_step: i32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub is_medallion: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub label: LabelAnchor,

    #[cfg_attr(feature = "serde", serde(default))]
    enabled: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    upgrade_index: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    count: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    temple: Temple,
}

impl Item {
    /// Creates a disabled simple item at the given background position.
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            sheet_x: 0,
            sheet_y: 0,
            capacity_progression: Vec::new(),
            item_progression: Vec::new(),
            count_max: 0,
            count_step: Self::default_count_step(),
            is_medallion: false,
            label: LabelAnchor::default(),
            enabled: false,
            upgrade_index: 0,
            count: 0,
            temple: Temple::default(),
        }
    }

    fn default_count_step() -> i32 {
        1
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet_x: i32, sheet_y: i32) -> Self {
        self.sheet_x = sheet_x;
        self.sheet_y = sheet_y;
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, progression: impl Into<Vec<i32>>) -> Self {
        self.capacity_progression = progression.into();
        self
    }

    #[must_use]
    pub fn with_sprites(mut self, progression: impl Into<Vec<SpriteVariant>>) -> Self {
        self.item_progression = progression.into();
        self
    }

    #[must_use]
    pub fn countable(mut self, count_max: i32, count_step: i32) -> Self {
        self.count_max = count_max;
        self.count_step = count_step;
        self
    }

    #[must_use]
    pub fn medallion(mut self) -> Self {
        self.is_medallion = true;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelAnchor) -> Self {
        self.label = label;
        self
    }

    /// Marks the item as owned from the start.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn upgrade_index(&self) -> usize {
        self.upgrade_index
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn temple(&self) -> Temple {
        self.temple
    }

    pub fn is_countable(&self) -> bool {
        self.count_max != 0
    }

    pub fn has_capacity(&self) -> bool {
        !self.capacity_progression.is_empty()
    }

    /// Number of tiers, taken from the sprite progression when present.
    fn tier_count(&self) -> usize {
        if self.item_progression.is_empty() {
            self.capacity_progression.len()
        } else {
            self.item_progression.len()
        }
    }

    /// Currently selected capacity, or `None` if the item has none to show.
    ///
    /// Countable items report their raw upgrade index here, not their count.
    /// Renderers wanting the counter should use [`Item::display_value`].
    pub fn capacity(&self) -> Option<i32> {
        if !self.has_capacity() {
            return None;
        }

        if self.is_countable() {
            return Some(self.upgrade_index as i32);
        }

        self.capacity_progression.get(self.upgrade_index).copied()
    }

    /// Number drawn next to the sprite: capacity first, then the counter.
    pub fn display_value(&self) -> Option<i32> {
        if self.has_capacity() {
            self.capacity()
        } else if self.is_countable() {
            Some(self.count)
        } else {
            None
        }
    }

    /// Upgrades the item to its next tier, or enables it if it was off.
    ///
    /// Returns false if nothing changed: the item is at its top tier, or is a
    /// counter already at `count_max`.
    pub fn upgrade(&mut self) -> bool {
        if !self.enabled {
            self.enabled = true;
            return true;
        }

        if self.is_countable() {
            if self.count >= self.count_max {
                return false;
            }
            self.count = self.count.saturating_add(self.count_step).min(self.count_max);
            return true;
        }

        let max = self.tier_count();
        if max == 0 || self.upgrade_index + 1 >= max {
            return false;
        }

        self.upgrade_index += 1;
        true
    }

    /// Downgrades the item to its previous tier, disabling it below the first.
    ///
    /// Counters stop at the previous multiple of `count_step` first, so a
    /// value clamped to `count_max` steps back to where it was clamped from.
    ///
    /// Returns false only if the item was already disabled.
    pub fn downgrade(&mut self) -> bool {
        if !self.enabled {
            return false;
        }

        if self.is_countable() {
            let step = self.count_step;
            let next = match step {
                s if s > 0 && self.count % s != 0 => self.count - self.count % s,
                s => self.count.saturating_sub(s),
            };
            if next < 0 {
                self.count = 0;
                self.enabled = false;
            } else {
                self.count = next;
            }
            return true;
        }

        if self.tier_count() == 0 || self.upgrade_index == 0 {
            self.enabled = false;
            return true;
        }

        self.upgrade_index -= 1;
        true
    }

    /// Moves the temple label one step, wrapping at both ends.
    pub fn cycle_temple(&mut self, up: bool) {
        self.temple = if up {
            self.temple.next()
        } else {
            self.temple.prev()
        };
    }

    /// Position of the item relative to the background origin.
    pub fn rect(&self) -> Rect {
        Rect::new(
            MARGIN_LEFT + self.x,
            MARGIN_TOP + self.y,
            SPRITE_WIDTH,
            SPRITE_HEIGHT,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    /// Position of the item sprite on the sprite sheet.
    ///
    /// Disabled items with a sprite progression show their last variant.
    pub fn sheet_rect(&self) -> Rect {
        let variant = if self.enabled {
            self.item_progression.get(self.upgrade_index)
        } else {
            self.item_progression.last()
        };

        let (x, y) = variant.map_or((self.sheet_x, self.sheet_y), |v| (v.sheet_x, v.sheet_y));
        Rect::new(x, y, SPRITE_WIDTH, SPRITE_HEIGHT)
    }
}
