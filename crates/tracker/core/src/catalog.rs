//! Ordered item collection with name and position lookups.
use crate::geometry::Point;
use crate::item::Item;

/// All items of one tracker session, in display order.
///
/// Indices are referenced by history entries and stay stable for the lifetime
/// of a catalog; the whole catalog is replaced on reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Index of the first item with the given name.
    pub fn index_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    pub fn by_name(&self, name: &str) -> Option<&Item> {
        self.index_by_name(name).and_then(|index| self.get(index))
    }

    /// Index of the item under the given pixel.
    ///
    /// Overlapping rectangles resolve to the earliest item in catalog order.
    pub fn index_by_position(&self, point: Point) -> Option<usize> {
        self.items.iter().position(|item| item.contains(point))
    }
}

impl From<Vec<Item>> for ItemCatalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
