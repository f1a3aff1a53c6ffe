//! Item grid widget.
//!
//! Draws a [`RenderFrame`] in the order the tracker expects: background,
//! keypad highlight, sprites, then labels. Sprites become colored blocks
//! carrying a short name; labels land on the cell under their baseline.
use ratatui::{Frame, buffer::Buffer};
use tracker_core::{Background, ItemCatalog, RenderFrame, render::keypad_highlight};

use crate::presentation::{theme::Theme, viewport::Viewport};

pub fn render(
    frame: &mut Frame,
    viewport: &Viewport,
    view: &RenderFrame<'_>,
    catalog: &ItemCatalog,
    theme: &Theme,
) {
    draw(frame.buffer_mut(), viewport, view, catalog, theme);
}

pub fn draw(
    buf: &mut Buffer,
    viewport: &Viewport,
    view: &RenderFrame<'_>,
    catalog: &ItemCatalog,
    theme: &Theme,
) {
    if view.background == Background::KeypadHelp {
        draw_zone_digits(buf, viewport, theme);
    }

    if let Some(highlight) = view.highlight {
        buf.set_style(viewport.to_cells(highlight), theme.highlight());
    }

    for sprite in &view.sprites {
        let cells = viewport.to_cells(sprite.dest);
        if cells.is_empty() {
            continue;
        }
        let style = theme.sprite(sprite.sheet);
        buf.set_style(cells, style);
        buf.set_stringn(
            cells.x,
            cells.y,
            abbreviate(sprite.name, cells.width as usize),
            cells.width as usize,
            style,
        );

        // Sprite progressions have no number to show, so mark the tier.
        let tier = catalog.get(sprite.item_index).and_then(|item| {
            (item.display_value().is_none() && item.upgrade_index() > 0)
                .then(|| format!("+{}", item.upgrade_index()))
        });
        if let Some(tier) = tier.filter(|_| cells.height > 1) {
            buf.set_stringn(cells.x, cells.y + 1, tier, cells.width as usize, style);
        }
    }

    for label in &view.labels {
        let Some((col, row)) = viewport.text_cell(label.position) else {
            continue;
        };

        let owner = view
            .sprites
            .iter()
            .find(|sprite| sprite.item_index == label.item_index)
            .filter(|sprite| {
                viewport
                    .to_cells(sprite.dest)
                    .contains(ratatui::layout::Position::new(col, row))
            });
        let style = match owner {
            Some(sprite) => theme.label(sprite.sheet, label.size),
            None => theme.free_label(label.size),
        };

        let max_width = viewport.area.right().saturating_sub(col) as usize;
        buf.set_stringn(col, row, &label.text, max_width, style);
    }
}

/// Writes each keypad zone's digit into its top-left cell.
fn draw_zone_digits(buf: &mut Buffer, viewport: &Viewport, theme: &Theme) {
    for zone in 1..=9u8 {
        let Some(cells) = keypad_highlight(zone).map(|rect| viewport.to_cells(rect)) else {
            continue;
        };
        if !cells.is_empty() {
            buf.set_string(cells.x, cells.y, zone.to_string(), theme.zone_digit());
        }
    }
}

/// Shortens an item name to `width` characters.
///
/// Single words are truncated; longer names take the leading letters of
/// their first two words, e.g. "Deku Stick" becomes "DeSt" at width 4.
pub fn abbreviate(name: &str, width: usize) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => String::new(),
        [word] => word.chars().take(width).collect(),
        [first, second, ..] => {
            let head = width.div_ceil(2);
            first
                .chars()
                .take(head)
                .chain(second.chars().take(width - head))
                .collect()
        }
    }
}
