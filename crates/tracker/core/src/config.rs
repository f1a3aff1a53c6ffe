use crate::geometry::Rect;

/// Characters that switch the keypad state machine out of idle.
///
/// Any other character typed while idle is ignored by the tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyBindings {
    /// Starts a zone/item keypad chord.
    pub keypad: char,
    /// Starts text entry for a required ("way of the hero") location.
    pub woth: char,
    /// Starts text entry for a known-useless location.
    pub barren: char,
    /// Starts text entry for a freeform note.
    pub note: char,
    /// Starts selection of a fixed hint slot, then text entry for it.
    pub always: char,
}

impl KeyBindings {
    pub const DEFAULT_KEYPAD: char = '/';
    pub const DEFAULT_WOTH: char = 'w';
    pub const DEFAULT_BARREN: char = 'b';
    pub const DEFAULT_NOTE: char = 'n';
    pub const DEFAULT_ALWAYS: char = 'a';
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            keypad: Self::DEFAULT_KEYPAD,
            woth: Self::DEFAULT_WOTH,
            barren: Self::DEFAULT_BARREN,
            note: Self::DEFAULT_NOTE,
            always: Self::DEFAULT_ALWAYS,
        }
    }
}

/// Screen areas of the tracker panels, in pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerLayout {
    pub item_tracker: Rect,
    pub hint_tracker: Rect,
    pub timer: Rect,
}

impl TrackerLayout {
    /// Size of the window covering every panel.
    pub fn window_size(&self) -> (i32, i32) {
        let bounds = self
            .item_tracker
            .union(&self.hint_tracker)
            .union(&self.timer);
        (bounds.width, bounds.height)
    }
}

impl Default for TrackerLayout {
    fn default() -> Self {
        Self {
            item_tracker: Rect::new(0, 0, 378, 462),
            hint_tracker: Rect::new(378, 0, 336, 462),
            timer: Rect::new(0, 462, 714, 42),
        }
    }
}
