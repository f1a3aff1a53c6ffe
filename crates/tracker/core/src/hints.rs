//! Hint bookkeeping: which locations are required, useless, or noted.
use indexmap::IndexSet;
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Fixed hint slots every seed reveals, in keypad slot order (1..=7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr, IntoStaticStr)]
#[repr(u8)]
pub enum AlwaysHint {
    #[strum(serialize = "Skull")]
    Skulltula = 0,
    #[strum(serialize = "Bigg")]
    Biggoron,
    #[strum(serialize = "30")]
    Skulls30,
    #[strum(serialize = "40")]
    Skulls40,
    #[strum(serialize = "50")]
    Skulls50,
    #[strum(serialize = "OOT")]
    OcarinaOfTime,
    #[strum(serialize = "Frogs 2")]
    Frogs2,
}

impl AlwaysHint {
    /// Slot addressed by a 1-based digit.
    pub fn from_digit(digit: u8) -> Option<Self> {
        digit.checked_sub(1).and_then(Self::from_repr)
    }

    pub fn label(self) -> &'static str {
        self.into()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Ledger collection a submitted text buffer lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HintTarget {
    Woth,
    Barren,
    Note,
    Always(AlwaysHint),
}

impl HintTarget {
    /// Short prompt shown while typing into this target.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Woth => "WotH",
            Self::Barren => "Barren",
            Self::Note => "Note",
            Self::Always(slot) => slot.label(),
        }
    }
}

/// Vocabulary of location names accepted for woth/barren hints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Locations(Vec<String>);

impl Locations {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical location name for typed text.
    ///
    /// Case-insensitive exact match first, then a unique case-insensitive
    /// prefix. Ambiguous or unknown text resolves to `None`.
    pub fn resolve(&self, text: &str) -> Option<&str> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        if let Some(exact) = self.iter().find(|name| name.to_lowercase() == needle) {
            return Some(exact);
        }

        let mut matches = self
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HintLedger {
    woths: IndexSet<String>,
    barrens: IndexSet<String>,
    always: [String; AlwaysHint::COUNT],
    sometimes: Vec<String>,
}

impl HintLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn woths(&self) -> impl Iterator<Item = &str> {
        self.woths.iter().map(String::as_str)
    }

    pub fn barrens(&self) -> impl Iterator<Item = &str> {
        self.barrens.iter().map(String::as_str)
    }

    pub fn always(&self, slot: AlwaysHint) -> &str {
        &self.always[slot.index()]
    }

    pub fn sometimes(&self) -> &[String] {
        &self.sometimes
    }

    pub fn is_woth(&self, location: &str) -> bool {
        self.woths.contains(location)
    }

    pub fn is_barren(&self, location: &str) -> bool {
        self.barrens.contains(location)
    }

    /// Marks a location as required. A location is never both woth and barren.
    pub fn mark_woth(&mut self, location: &str) -> bool {
        self.barrens.shift_remove(location);
        self.woths.insert(location.to_string())
    }

    /// Marks a location as useless. A location is never both woth and barren.
    pub fn mark_barren(&mut self, location: &str) -> bool {
        self.woths.shift_remove(location);
        self.barrens.insert(location.to_string())
    }

    /// Replaces the text of a fixed slot. Blank text clears the slot.
    pub fn set_always(&mut self, slot: AlwaysHint, text: &str) {
        self.always[slot.index()] = text.trim().to_string();
    }

    /// Appends a freeform note. Blank notes are ignored.
    pub fn add_note(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.sometimes.push(text.to_string());
        true
    }

    /// Files submitted text under `target`, resolving location names for
    /// woth/barren hints. Returns false if the ledger did not change.
    pub fn submit(&mut self, target: HintTarget, text: &str, locations: &Locations) -> bool {
        match target {
            HintTarget::Woth | HintTarget::Barren => {
                let Some(location) = locations.resolve(text) else {
                    tracing::debug!(text, "ignoring hint for unknown location");
                    return false;
                };
                if target == HintTarget::Woth {
                    self.mark_woth(location)
                } else {
                    self.mark_barren(location)
                }
            }
            HintTarget::Note => self.add_note(text),
            HintTarget::Always(slot) => {
                let before = self.always[slot.index()].clone();
                self.set_always(slot, text);
                before != self.always[slot.index()]
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations() -> Locations {
        Locations::new(vec![
            "Kokiri Forest".into(),
            "Lost Woods".into(),
            "Lake Hylia".into(),
            "Lon Lon Ranch".into(),
            "Forest Temple".into(),
        ])
    }

    #[test]
    fn resolves_exact_and_unique_prefix() {
        let locations = locations();
        assert_eq!(locations.resolve("lake hylia"), Some("Lake Hylia"));
        assert_eq!(locations.resolve("  kok "), Some("Kokiri Forest"));
        assert_eq!(locations.resolve("lo"), None);
        assert_eq!(locations.resolve("lon"), Some("Lon Lon Ranch"));
        assert_eq!(locations.resolve("Gerudo"), None);
        assert_eq!(locations.resolve(""), None);
    }

    #[test]
    fn woth_and_barren_are_exclusive() {
        let mut ledger = HintLedger::new();
        assert!(ledger.mark_woth("Lost Woods"));
        assert!(!ledger.mark_woth("Lost Woods"));
        assert!(ledger.mark_barren("Lost Woods"));
        assert!(!ledger.is_woth("Lost Woods"));
        assert!(ledger.is_barren("Lost Woods"));
    }

    #[test]
    fn submit_routes_by_target() {
        let locations = locations();
        let mut ledger = HintLedger::new();

        assert!(ledger.submit(HintTarget::Woth, "forest t", &locations));
        assert!(ledger.submit(HintTarget::Barren, "lake", &locations));
        assert!(!ledger.submit(HintTarget::Barren, "nowhere", &locations));
        assert!(ledger.submit(HintTarget::Note, "ice arrows on fire temple", &locations));
        assert!(!ledger.submit(HintTarget::Note, "   ", &locations));
        assert!(ledger.submit(
            HintTarget::Always(AlwaysHint::Frogs2),
            "Hookshot",
            &locations
        ));

        assert_eq!(ledger.woths().collect::<Vec<_>>(), ["Forest Temple"]);
        assert_eq!(ledger.barrens().collect::<Vec<_>>(), ["Lake Hylia"]);
        assert_eq!(ledger.sometimes(), ["ice arrows on fire temple"]);
        assert_eq!(ledger.always(AlwaysHint::Frogs2), "Hookshot");
    }

    #[test]
    fn always_slots_use_one_based_digits() {
        assert_eq!(AlwaysHint::from_digit(1), Some(AlwaysHint::Skulltula));
        assert_eq!(AlwaysHint::from_digit(7), Some(AlwaysHint::Frogs2));
        assert_eq!(AlwaysHint::from_digit(0), None);
        assert_eq!(AlwaysHint::from_digit(8), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut ledger = HintLedger::new();
        ledger.mark_woth("Lost Woods");
        ledger.set_always(AlwaysHint::Skulls30, "Bombchus");
        ledger.add_note("check ranch");
        ledger.clear();
        assert_eq!(ledger, HintLedger::default());
    }
}
