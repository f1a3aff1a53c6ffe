//! Facade composing the catalog, keypad map, history, input and hints.
//!
//! [`Tracker`] is the only owner of tracker state. Every input event is
//! processed to completion before the next one; nothing here blocks or
//! performs I/O.
use crate::catalog::ItemCatalog;
use crate::config::KeyBindings;
use crate::error::TrackerError;
use crate::geometry::Point;
use crate::hints::{HintLedger, Locations};
use crate::history::History;
use crate::input::{InputCommand, KeypadInput};
use crate::render::RenderFrame;
use crate::zone_map::ZoneItemMap;

#[derive(Clone, Debug)]
pub struct Tracker {
    catalog: ItemCatalog,
    zone_item_map: ZoneItemMap,
    locations: Locations,
    input: KeypadInput,
    hints: HintLedger,
    history: History,
}

impl Tracker {
    pub fn new(
        catalog: ItemCatalog,
        zone_item_map: ZoneItemMap,
        locations: Locations,
        bindings: KeyBindings,
    ) -> Self {
        Self {
            catalog,
            zone_item_map,
            locations,
            input: KeypadInput::new(bindings),
            hints: HintLedger::new(),
            history: History::new(),
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn zone_item_map(&self) -> &ZoneItemMap {
        &self.zone_item_map
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    pub fn hints(&self) -> &HintLedger {
        &self.hints
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn keypad(&self) -> &KeypadInput {
        &self.input
    }

    // ===== item transitions =====

    /// Upgrades an item, recording history if it changed.
    pub fn upgrade(&mut self, index: usize) -> bool {
        self.change_item(index, true)
    }

    /// Downgrades an item, recording history if it changed.
    pub fn downgrade(&mut self, index: usize) -> bool {
        self.change_item(index, false)
    }

    fn change_item(&mut self, index: usize, is_upgrade: bool) -> bool {
        let Some(item) = self.catalog.get_mut(index) else {
            return false;
        };

        let changed = if is_upgrade {
            item.upgrade()
        } else {
            item.downgrade()
        };

        if changed {
            self.history.push(index, is_upgrade);
        }
        changed
    }

    /// Cycles the temple label of an item. Not recorded in history.
    pub fn cycle_temple(&mut self, index: usize, up: bool) -> bool {
        match self.catalog.get_mut(index) {
            Some(item) => {
                item.cycle_temple(up);
                true
            }
            None => false,
        }
    }

    // ===== pointer input =====

    /// Upgrades the item under the given point.
    pub fn click_left(&mut self, x: i32, y: i32) -> bool {
        self.item_at(x, y)
            .is_some_and(|index| self.change_item(index, true))
    }

    /// Downgrades the item under the given point.
    pub fn click_right(&mut self, x: i32, y: i32) -> bool {
        self.item_at(x, y)
            .is_some_and(|index| self.change_item(index, false))
    }

    /// Cycles the temple of a medallion under the point, otherwise acts as a
    /// left (up) or right (down) click.
    pub fn wheel(&mut self, x: i32, y: i32, up: bool) -> bool {
        let Some(index) = self.item_at(x, y) else {
            return false;
        };

        if self.catalog.get(index).is_some_and(|item| item.is_medallion) {
            return self.cycle_temple(index, up);
        }
        self.change_item(index, up)
    }

    fn item_at(&self, x: i32, y: i32) -> Option<usize> {
        self.catalog.index_by_position(Point::new(x, y))
    }

    // ===== history =====

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.catalog).is_some()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.catalog).is_some()
    }

    // ===== keyboard input =====

    /// True while keyboard input belongs to the tracker (a chord or text entry
    /// is pending). Callers should then route keys here instead of hotkeys.
    pub fn eat_input(&self) -> bool {
        self.input.eats_input()
    }

    /// Feeds typed characters through the keypad state machine.
    pub fn input(&mut self, chars: impl IntoIterator<Item = char>) {
        for ch in chars {
            if let Some(command) = self.input.feed(ch) {
                self.apply(command);
            }
        }
    }

    pub fn backspace(&mut self) {
        self.input.backspace();
    }

    /// Finalizes pending text entry into the hint ledger.
    pub fn submit(&mut self) {
        if let Some(command) = self.input.submit() {
            self.apply(command);
        }
    }

    pub fn cancel(&mut self) {
        self.input.cancel();
    }

    fn apply(&mut self, command: InputCommand) {
        match command {
            InputCommand::Chord { zone, item } => {
                match self.zone_item_map.resolve_index(zone, item, &self.catalog) {
                    Ok(index) => {
                        self.change_item(index, true);
                    }
                    Err(err) if err.severity().is_internal() => {
                        tracing::warn!(zone, item, code = err.error_code(), "{err}");
                    }
                    Err(err) => {
                        tracing::debug!(zone, item, code = err.error_code(), "{err}");
                    }
                }
            }
            InputCommand::Hint { target, text } => {
                self.hints.submit(target, &text, &self.locations);
            }
        }
    }

    // ===== lifecycle =====

    /// Installs a new catalog and keypad map, clearing history, hints and any
    /// pending input. Location vocabulary and key bindings are kept.
    pub fn reset(&mut self, catalog: ItemCatalog, zone_item_map: ZoneItemMap) {
        tracing::info!(items = catalog.len(), "resetting tracker");
        self.catalog = catalog;
        self.zone_item_map = zone_item_map;
        self.history.clear();
        self.hints.clear();
        self.input.cancel();
    }

    /// Draw requests for the current state.
    pub fn render(&self) -> RenderFrame<'_> {
        RenderFrame::build(&self.catalog, &self.input, &self.hints)
    }
}
