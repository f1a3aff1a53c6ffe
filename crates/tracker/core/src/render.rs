//! Draw requests handed to an external renderer.
//!
//! The core never draws. [`RenderFrame::build`] flattens the tracker state into
//! sprites, text labels and overlays in tracker-local pixel coordinates;
//! frontends decide how those map onto their surface.
use crate::catalog::ItemCatalog;
use crate::geometry::{Point, Rect};
use crate::hints::HintLedger;
use crate::input::{InputState, KeypadInput};
use crate::item::{GRID_SIZE, Item, LabelAnchor, MARGIN_LEFT, MARGIN_TOP};
use crate::zone_map::KEYPAD_SIZE;

/// Background image to draw under the items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    Normal,
    /// Background annotated with keypad zones, shown during a chord.
    KeypadHelp,
}

/// Sprite sheet an item is cut from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sheet {
    Disabled,
    Enabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSize {
    Capacity,
    Temple,
}

impl TextSize {
    pub const fn points(&self) -> u16 {
        match self {
            Self::Capacity => 20,
            Self::Temple => 13,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteDraw<'a> {
    pub item_index: usize,
    pub name: &'a str,
    /// Destination on screen, relative to the tracker origin.
    pub dest: Rect,
    /// Source rectangle on the sheet.
    pub source: Rect,
    pub sheet: Sheet,
}

/// Text anchored at its baseline-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLabel {
    pub item_index: usize,
    pub text: String,
    pub position: Point,
    pub size: TextSize,
}

/// Pending keyboard input, for the prompt line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputView {
    pub prompt: &'static str,
    pub buffer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderFrame<'a> {
    pub background: Background,
    /// Keypad zone overlay while a zone digit is pending.
    pub highlight: Option<Rect>,
    /// Disabled sprites first, then enabled ones, to batch sheet switches.
    pub sprites: Vec<SpriteDraw<'a>>,
    pub labels: Vec<TextLabel>,
    pub input: Option<InputView>,
    pub hints: &'a HintLedger,
}

impl<'a> RenderFrame<'a> {
    pub fn build(catalog: &'a ItemCatalog, input: &KeypadInput, hints: &'a HintLedger) -> Self {
        let (background, highlight) = if input.is_chord_pending() {
            (
                Background::KeypadHelp,
                input.active_zone().and_then(keypad_highlight),
            )
        } else {
            (Background::Normal, None)
        };

        let mut sprites = Vec::with_capacity(catalog.len());
        for enabled in [false, true] {
            sprites.extend(
                catalog
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| item.is_enabled() == enabled)
                    .map(|(index, item)| sprite(index, item)),
            );
        }

        let mut labels: Vec<TextLabel> = catalog
            .iter()
            .enumerate()
            .filter_map(|(index, item)| temple_label(index, item))
            .collect();
        labels.extend(
            catalog
                .iter()
                .enumerate()
                .filter_map(|(index, item)| value_label(index, item)),
        );

        Self {
            background,
            highlight,
            sprites,
            labels,
            input: input_view(input.state()),
            hints,
        }
    }
}

fn sprite(item_index: usize, item: &Item) -> SpriteDraw<'_> {
    SpriteDraw {
        item_index,
        name: &item.name,
        dest: item.rect(),
        source: item.sheet_rect(),
        sheet: if item.is_enabled() {
            Sheet::Enabled
        } else {
            Sheet::Disabled
        },
    }
}

fn temple_label(item_index: usize, item: &Item) -> Option<TextLabel> {
    let text = item.temple().label();
    if !item.is_medallion || text.is_empty() {
        return None;
    }

    let rect = item.rect();
    Some(TextLabel {
        item_index,
        text: text.to_string(),
        position: Point::new(rect.x, rect.max().y),
        size: TextSize::Temple,
    })
}

fn value_label(item_index: usize, item: &Item) -> Option<TextLabel> {
    if !item.is_enabled() {
        return None;
    }
    let value = item.display_value()?;

    let rect = item.rect();
    let position = match item.label {
        LabelAnchor::Below => Point::new(rect.x, rect.max().y),
        LabelAnchor::RightSlot => {
            let mut x = rect.x + GRID_SIZE + MARGIN_LEFT;
            if value == 100 {
                x -= 5;
            } else if value < 10 {
                x += 5;
            }
            Point::new(x, rect.y + MARGIN_TOP + GRID_SIZE / 2)
        }
    };

    Some(TextLabel {
        item_index,
        text: value.to_string(),
        position,
        size: TextSize::Capacity,
    })
}

fn input_view(state: &InputState) -> Option<InputView> {
    let (prompt, buffer) = match state {
        InputState::Idle => return None,
        InputState::AwaitingZoneDigit => ("Zone", String::new()),
        InputState::AwaitingItemDigit { zone } => ("Item", zone.to_string()),
        InputState::AwaitingHintSlot => ("Slot 1-7", String::new()),
        InputState::Text { target, buffer } => (target.prompt(), buffer.clone()),
    };
    Some(InputView { prompt, buffer })
}

/// Screen area covered by a keypad zone, relative to the tracker origin.
///
/// Zones follow the numeric keypad: 7-8-9 on the top row, 1-2-3 at the
/// bottom, each a 3×3 block of grid slots. Zones 9 and 3 are single-column
/// strips each spanning half of the 9-slot-high grid.
pub fn keypad_highlight(zone: u8) -> Option<Rect> {
    if zone == 0 || zone as usize > KEYPAD_SIZE {
        return None;
    }

    const SLOTS: [i32; KEYPAD_SIZE + 1] = [0, 6, 7, 8, 3, 4, 5, 0, 1, 2];
    let slot = SLOTS[zone as usize];

    let edge = GRID_SIZE * 3;
    let half_height = 4 * GRID_SIZE + GRID_SIZE / 2;
    let x = (slot % 3) * edge;
    let y = (slot / 3) * edge;

    let rect = match slot {
        2 => Rect::new(x, 0, GRID_SIZE, half_height),
        8 => Rect::new(x, half_height, GRID_SIZE, half_height),
        _ => Rect::new(x, y, edge, edge),
    };
    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::HintTarget;

    #[test]
    fn highlight_follows_keypad_layout() {
        assert_eq!(keypad_highlight(7), Some(Rect::new(0, 0, 126, 126)));
        assert_eq!(keypad_highlight(5), Some(Rect::new(126, 126, 126, 126)));
        assert_eq!(keypad_highlight(1), Some(Rect::new(0, 252, 126, 126)));
        assert_eq!(keypad_highlight(2), Some(Rect::new(126, 252, 126, 126)));
    }

    #[test]
    fn highlight_strips_for_zones_nine_and_three() {
        assert_eq!(keypad_highlight(9), Some(Rect::new(252, 0, 42, 189)));
        assert_eq!(keypad_highlight(3), Some(Rect::new(252, 189, 42, 189)));
    }

    #[test]
    fn highlight_rejects_invalid_zones() {
        assert_eq!(keypad_highlight(0), None);
        assert_eq!(keypad_highlight(10), None);
    }

    #[test]
    fn sprites_are_ordered_disabled_first() {
        let catalog = ItemCatalog::new(vec![
            Item::new("Bow", 0, 0).enabled(),
            Item::new("Hammer", 42, 0),
            Item::new("Lens", 84, 0).enabled(),
        ]);
        let input = KeypadInput::default();
        let hints = HintLedger::new();
        let frame = RenderFrame::build(&catalog, &input, &hints);

        let order: Vec<_> = frame.sprites.iter().map(|s| (s.name, s.sheet)).collect();
        assert_eq!(
            order,
            [
                ("Hammer", Sheet::Disabled),
                ("Bow", Sheet::Enabled),
                ("Lens", Sheet::Enabled),
            ]
        );
        assert_eq!(frame.background, Background::Normal);
        assert_eq!(frame.input, None);
    }

    #[test]
    fn labels_cover_values_and_temples() {
        let mut skulls = Item::new("Gold Skulltula Token", 0, 42)
            .countable(100, 1)
            .with_label(LabelAnchor::RightSlot)
            .enabled();
        for _ in 0..7 {
            skulls.upgrade();
        }
        let mut medallion = Item::new("Fire Medallion", 84, 84).medallion();
        medallion.cycle_temple(true);

        let catalog = ItemCatalog::new(vec![
            Item::new("Bombs", 0, 0).with_capacity([20, 30, 40]).enabled(),
            skulls,
            medallion,
            Item::new("Slingshot", 42, 0).with_capacity([30, 40, 50]),
        ]);
        let input = KeypadInput::default();
        let hints = HintLedger::new();
        let frame = RenderFrame::build(&catalog, &input, &hints);

        let labels: Vec<_> = frame
            .labels
            .iter()
            .map(|l| (l.text.as_str(), l.position, l.size))
            .collect();
        assert_eq!(
            labels,
            [
                ("Free", Point::new(88, 122), TextSize::Temple),
                ("20", Point::new(4, 38), TextSize::Capacity),
                ("7", Point::new(55, 71), TextSize::Capacity),
            ]
        );
    }

    #[test]
    fn pending_input_shows_prompt_and_highlight() {
        let catalog = ItemCatalog::default();
        let hints = HintLedger::new();
        let mut input = KeypadInput::default();

        input.feed('/');
        let frame = RenderFrame::build(&catalog, &input, &hints);
        assert_eq!(frame.background, Background::KeypadHelp);
        assert_eq!(frame.highlight, None);

        input.feed('9');
        let frame = RenderFrame::build(&catalog, &input, &hints);
        assert_eq!(frame.highlight, keypad_highlight(9));
        assert_eq!(
            frame.input,
            Some(InputView {
                prompt: "Item",
                buffer: "9".into(),
            })
        );

        input.cancel();
        input.feed('w');
        input.feed('k');
        let frame = RenderFrame::build(&catalog, &input, &hints);
        assert_eq!(frame.background, Background::Normal);
        assert_eq!(
            frame.input,
            Some(InputView {
                prompt: HintTarget::Woth.prompt(),
                buffer: "k".into(),
            })
        );
    }
}
