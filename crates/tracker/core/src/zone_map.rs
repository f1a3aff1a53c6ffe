//! Keypad addressing: `(zone digit, item digit)` to item name.
//!
//! Digits follow the physical numeric keypad (1..=9) and are stored 0-indexed.
//! Rows are zones, columns are items within the zone.
use crate::catalog::ItemCatalog;
use crate::error::LookupError;

pub const KEYPAD_SIZE: usize = 9;

/// Fixed 9×9 grid of item names. Empty strings mark undefined slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ZoneItemMap([[String; KEYPAD_SIZE]; KEYPAD_SIZE]);

impl ZoneItemMap {
    pub fn new(grid: [[String; KEYPAD_SIZE]; KEYPAD_SIZE]) -> Self {
        Self(grid)
    }

    /// Sets a cell by keypad digits, ignoring digits outside `1..=9`.
    #[must_use]
    pub fn with(mut self, zone: u8, item: u8, name: impl Into<String>) -> Self {
        if let Some((row, col)) = cell(zone, item) {
            self.0[row][col] = name.into();
        }
        self
    }

    /// Item name stored under the given keypad digits.
    pub fn resolve(&self, zone: u8, item: u8) -> Result<&str, LookupError> {
        let (row, col) = cell(zone, item).ok_or(LookupError::OutOfRange { zone, item })?;

        let name = self.0[row][col].as_str();
        if name.is_empty() {
            return Err(LookupError::Undefined { zone, item });
        }

        Ok(name)
    }

    /// Catalog index of the item stored under the given keypad digits.
    ///
    /// A name absent from the catalog is a configuration error, reported as
    /// [`LookupError::Misconfigured`].
    pub fn resolve_index(
        &self,
        zone: u8,
        item: u8,
        catalog: &ItemCatalog,
    ) -> Result<usize, LookupError> {
        let name = self.resolve(zone, item)?;
        catalog
            .index_by_name(name)
            .ok_or_else(|| LookupError::Misconfigured {
                name: name.to_string(),
            })
    }

    /// Defined cells whose name has no catalog entry, as `(zone, item, name)`.
    pub fn misconfigured<'a>(
        &'a self,
        catalog: &'a ItemCatalog,
    ) -> impl Iterator<Item = (u8, u8, &'a str)> + 'a {
        self.cells()
            .filter(move |(_, _, name)| catalog.index_by_name(name).is_none())
    }

    /// All defined cells as `(zone, item, name)` in keypad digits.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8, &str)> {
        self.0.iter().enumerate().flat_map(|(row, names)| {
            names
                .iter()
                .enumerate()
                .filter(|(_, name)| !name.is_empty())
                .map(move |(col, name)| (row as u8 + 1, col as u8 + 1, name.as_str()))
        })
    }
}

fn cell(zone: u8, item: u8) -> Option<(usize, usize)> {
    let valid = 1..=KEYPAD_SIZE as u8;
    if !valid.contains(&zone) || !valid.contains(&item) {
        return None;
    }
    Some((zone as usize - 1, item as usize - 1))
}
