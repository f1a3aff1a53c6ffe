//! Item catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracker_core::Item;

use crate::loaders::{LoadResult, read_file};

/// Item list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load items from a RON file, in display order.
    ///
    /// Items flagged `enabled` start owned; every other progression field
    /// starts at its lowest tier.
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse items from {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Item>> {
        let list: ItemList = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(list.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::{LabelAnchor, SpriteVariant};

    #[test]
    fn parses_every_item_kind() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (name: "Kokiri Tunic", x: 210, y: 210, enabled: true),
                    (name: "Bomb Bag", x: 84, y: 0, capacity_progression: [20, 30, 40]),
                    (
                        name: "Hookshot",
                        x: 126,
                        y: 42,
                        item_progression: [(sheet_x: 102, sheet_y: 34), (sheet_x: 0, sheet_y: 306)],
                    ),
                    (name: "Gold Skulltula Token", x: 252, y: 294, count_max: 100, label: RightSlot),
                    (name: "Forest Medallion", x: 252, y: 0, is_medallion: true),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(items.len(), 5);
        assert!(items[0].is_enabled());
        assert!(!items[1].is_enabled());
        assert_eq!(items[1].capacity_progression, [20, 30, 40]);
        assert_eq!(items[2].item_progression[1], SpriteVariant::new(0, 306));
        assert_eq!(items[3].count_step, 1);
        assert_eq!(items[3].label, LabelAnchor::RightSlot);
        assert!(items[4].is_medallion);
    }

    #[test]
    fn reports_parse_errors() {
        let err = ItemLoader::parse("(items: [(x: 0)])").unwrap_err();
        assert!(err.to_string().contains("item catalog RON"));
    }
}
