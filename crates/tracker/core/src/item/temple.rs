use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Secondary annotation cycled on medallion items: where the medallion is.
///
/// The blank label is part of the cycle so a medallion can be "unknown".
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
pub enum Temple {
    #[default]
    #[strum(serialize = "")]
    Unknown = 0,
    Free,
    Deku,
    #[strum(serialize = "DC")]
    DodongosCavern,
    Jabu,
    Forest,
    Fire,
    Water,
    Spirit,
    #[strum(serialize = "Shdw")]
    Shadow,
}

impl Temple {
    /// Label drawn under the medallion.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Next label, wrapping from the last back to [`Temple::Unknown`].
    pub fn next(self) -> Self {
        Self::from_index((self as usize + 1) % Self::COUNT)
    }

    /// Previous label, wrapping from [`Temple::Unknown`] to the last.
    pub fn prev(self) -> Self {
        Self::from_index((self as usize + Self::COUNT - 1) % Self::COUNT)
    }

    fn from_index(index: usize) -> Self {
        Self::from_repr(index as u8).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn cycles_in_both_directions() {
        assert_eq!(Temple::Unknown.next(), Temple::Free);
        assert_eq!(Temple::Shadow.next(), Temple::Unknown);
        assert_eq!(Temple::Unknown.prev(), Temple::Shadow);
        assert_eq!(Temple::Free.prev(), Temple::Unknown);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut temple = Temple::Forest;
        for _ in 0..Temple::COUNT {
            temple = temple.next();
        }
        assert_eq!(temple, Temple::Forest);
    }

    #[test]
    fn labels_match_display_strings() {
        let labels: Vec<_> = Temple::iter().map(Temple::label).collect();
        assert_eq!(
            labels,
            [
                "", "Free", "Deku", "DC", "Jabu", "Forest", "Fire", "Water", "Spirit", "Shdw"
            ]
        );
    }
}
