//! Consistency checks over loaded content.
//!
//! Nothing here rejects content. Problems are collected as warnings so a
//! half-broken configuration still yields a usable tracker.
use std::collections::HashSet;
use std::fmt;

use tracker_core::{Item, ItemCatalog, ZoneItemMap};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentWarning {
    /// Name lookups only ever see the first item with this name.
    DuplicateName { name: String },
    /// Counting wins for transitions; the capacity list is only displayed.
    CountableWithCapacity { name: String },
    ProgressionLengthMismatch {
        name: String,
        capacities: usize,
        sprites: usize,
    },
    NonPositiveStep { name: String, step: i32 },
    NegativeCountMax { name: String, count_max: i32 },
    /// The last upgrade is clamped to `count_max`.
    CountMaxOffStep {
        name: String,
        count_max: i32,
        step: i32,
    },
    /// Keypad cell naming an item absent from the catalog.
    MisconfiguredCell { zone: u8, item: u8, name: String },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "duplicate item name {name:?}"),
            Self::CountableWithCapacity { name } => {
                write!(f, "item {name:?} is countable and has a capacity progression")
            }
            Self::ProgressionLengthMismatch {
                name,
                capacities,
                sprites,
            } => write!(
                f,
                "item {name:?} has {capacities} capacities but {sprites} sprite variants"
            ),
            Self::NonPositiveStep { name, step } => {
                write!(f, "item {name:?} has non-positive count step {step}")
            }
            Self::NegativeCountMax { name, count_max } => {
                write!(f, "item {name:?} has negative count max {count_max}")
            }
            Self::CountMaxOffStep {
                name,
                count_max,
                step,
            } => write!(
                f,
                "item {name:?} has count max {count_max} not a multiple of step {step}"
            ),
            Self::MisconfiguredCell { zone, item, name } => {
                write!(f, "keypad cell {zone}{item} names unknown item {name:?}")
            }
        }
    }
}

/// Checks items and the keypad grid against each other.
pub fn validate(items: &[Item], zone_item_map: &ZoneItemMap) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for item in items {
        let name = || item.name.clone();

        if !seen.insert(item.name.as_str()) {
            warnings.push(ContentWarning::DuplicateName { name: name() });
        }

        if item.is_countable() && item.has_capacity() {
            warnings.push(ContentWarning::CountableWithCapacity { name: name() });
        }

        let capacities = item.capacity_progression.len();
        let sprites = item.item_progression.len();
        if capacities != 0 && sprites != 0 && capacities != sprites {
            warnings.push(ContentWarning::ProgressionLengthMismatch {
                name: name(),
                capacities,
                sprites,
            });
        }

        if item.is_countable() {
            if item.count_step <= 0 {
                warnings.push(ContentWarning::NonPositiveStep {
                    name: name(),
                    step: item.count_step,
                });
            }
            if item.count_max < 0 {
                warnings.push(ContentWarning::NegativeCountMax {
                    name: name(),
                    count_max: item.count_max,
                });
            }
            if item.count_step > 0 && item.count_max % item.count_step != 0 {
                warnings.push(ContentWarning::CountMaxOffStep {
                    name: name(),
                    count_max: item.count_max,
                    step: item.count_step,
                });
            }
        }
    }

    let catalog = ItemCatalog::new(items.to_vec());
    warnings.extend(zone_item_map.misconfigured(&catalog).map(|(zone, item, name)| {
        ContentWarning::MisconfiguredCell {
            zone,
            item,
            name: name.to_string(),
        }
    }));

    warnings
}

/// Logs every warning through `tracing`.
pub fn report(warnings: &[ContentWarning]) {
    for warning in warnings {
        tracing::warn!(target: "tracker_content", "{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::SpriteVariant;

    #[test]
    fn clean_content_has_no_warnings() {
        let items = vec![
            Item::new("Bow", 0, 0).with_capacity([30, 40, 50]),
            Item::new("Gold Skulltula Token", 42, 0).countable(100, 1),
        ];
        let map = ZoneItemMap::default().with(7, 7, "Bow");
        assert!(validate(&items, &map).is_empty());
    }

    #[test]
    fn flags_each_item_problem() {
        let items = vec![
            Item::new("Bow", 0, 0),
            Item::new("Bow", 42, 0),
            Item::new("Wallet", 84, 0)
                .countable(999, 1)
                .with_capacity([99, 200]),
            Item::new("Strength", 126, 0)
                .with_capacity([1, 2, 3])
                .with_sprites([SpriteVariant::new(0, 0), SpriteVariant::new(34, 0)]),
            Item::new("Rupees", 168, 0).countable(500, 0),
        ];

        let warnings = validate(&items, &ZoneItemMap::default());
        assert_eq!(
            warnings,
            [
                ContentWarning::DuplicateName { name: "Bow".into() },
                ContentWarning::CountableWithCapacity {
                    name: "Wallet".into()
                },
                ContentWarning::ProgressionLengthMismatch {
                    name: "Strength".into(),
                    capacities: 3,
                    sprites: 2,
                },
                ContentWarning::NonPositiveStep {
                    name: "Rupees".into(),
                    step: 0,
                },
            ]
        );
    }

    #[test]
    fn flags_count_max_off_the_step_grid() {
        let items = vec![
            Item::new("Rupees", 0, 0).countable(5, 2),
            Item::new("Heart Piece", 42, 0).countable(36, 4),
        ];

        let warnings = validate(&items, &ZoneItemMap::default());
        assert_eq!(
            warnings,
            [ContentWarning::CountMaxOffStep {
                name: "Rupees".into(),
                count_max: 5,
                step: 2,
            }]
        );
        assert_eq!(
            warnings[0].to_string(),
            "item \"Rupees\" has count max 5 not a multiple of step 2"
        );
    }

    #[test]
    fn flags_keypad_cells_without_items() {
        let items = vec![Item::new("Hookshot", 0, 0)];
        let map = ZoneItemMap::default()
            .with(8, 4, "Hookshot")
            .with(8, 5, "Longshot");

        let warnings = validate(&items, &map);
        assert_eq!(
            warnings,
            [ContentWarning::MisconfiguredCell {
                zone: 8,
                item: 5,
                name: "Longshot".into(),
            }]
        );
        assert_eq!(
            warnings[0].to_string(),
            "keypad cell 85 names unknown item \"Longshot\""
        );
    }
}
