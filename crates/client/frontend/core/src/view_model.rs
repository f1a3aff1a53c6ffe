//! View-model snapshots derived from the hint ledger.
use strum::IntoEnumIterator;
use tracker_core::{AlwaysHint, HintLedger};

/// One titled block of the hint panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// High-level snapshot of the hint ledger used by presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintPanel {
    pub sections: Vec<HintSection>,
}

impl HintPanel {
    pub fn from_ledger(ledger: &HintLedger) -> Self {
        let always = AlwaysHint::iter()
            .map(|slot| format!("{:<7} {}", slot.label(), ledger.always(slot)))
            .collect();

        Self {
            sections: vec![
                HintSection {
                    title: "WotH",
                    lines: ledger.woths().map(str::to_string).collect(),
                },
                HintSection {
                    title: "Barren",
                    lines: ledger.barrens().map(str::to_string).collect(),
                },
                HintSection {
                    title: "Always",
                    lines: always,
                },
                HintSection {
                    title: "Sometimes",
                    lines: ledger.sometimes().to_vec(),
                },
            ],
        }
    }

    pub fn section(&self, title: &str) -> Option<&HintSection> {
        self.sections.iter().find(|section| section.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_ledger_contents() {
        let mut ledger = HintLedger::new();
        ledger.mark_woth("Lost Woods");
        ledger.mark_barren("Lake Hylia");
        ledger.set_always(AlwaysHint::OcarinaOfTime, "Light Arrows");
        ledger.add_note("bean salesman");

        let panel = HintPanel::from_ledger(&ledger);
        assert_eq!(panel.section("WotH").unwrap().lines, ["Lost Woods"]);
        assert_eq!(panel.section("Barren").unwrap().lines, ["Lake Hylia"]);
        assert_eq!(panel.section("Sometimes").unwrap().lines, ["bean salesman"]);

        let always = &panel.section("Always").unwrap().lines;
        assert_eq!(always.len(), 7);
        assert_eq!(always[5], "OOT     Light Arrows");
        assert_eq!(always[0], "Skull   ");
    }
}
