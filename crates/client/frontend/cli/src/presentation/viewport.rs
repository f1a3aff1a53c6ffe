//! Mapping between tracker pixels and terminal cells.
//!
//! A cell stands for the pixel at its center. A pixel rectangle covers the
//! cells whose centers fall inside it, which keeps drawing and mouse hit
//! tests consistent: clicking any drawn cell of an item hits that item.
use ratatui::layout::Rect as CellRect;
use tracker_core::{Point, Rect as PixelRect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Cell area the tracker origin is drawn into.
    pub area: CellRect,
    pub pixels_per_column: u16,
    pub pixels_per_row: u16,
}

impl Viewport {
    pub fn new(area: CellRect, pixels_per_column: u16, pixels_per_row: u16) -> Self {
        Self {
            area,
            pixels_per_column: pixels_per_column.max(1),
            pixels_per_row: pixels_per_row.max(1),
        }
    }

    /// Terminal size needed to show a pixel extent.
    pub fn cells_for(
        width: i32,
        height: i32,
        pixels_per_column: u16,
        pixels_per_row: u16,
    ) -> (u16, u16) {
        let cols = ceil_div(width.max(0), i32::from(pixels_per_column.max(1)));
        let rows = ceil_div(height.max(0), i32::from(pixels_per_row.max(1)));
        (clamp_u16(cols), clamp_u16(rows))
    }

    /// Tracker pixel under a terminal cell, or `None` outside the area.
    pub fn to_pixel(&self, column: u16, row: u16) -> Option<Point> {
        if !self.area.contains(ratatui::layout::Position::new(column, row)) {
            return None;
        }

        let ppc = i32::from(self.pixels_per_column);
        let ppr = i32::from(self.pixels_per_row);
        let col = i32::from(column - self.area.x);
        let row = i32::from(row - self.area.y);
        Some(Point::new(col * ppc + ppc / 2, row * ppr + ppr / 2))
    }

    /// Cells covered by a pixel rectangle, clipped to the area.
    pub fn to_cells(&self, rect: PixelRect) -> CellRect {
        let ppc = i32::from(self.pixels_per_column);
        let ppr = i32::from(self.pixels_per_row);

        let x0 = first_cell(rect.x, ppc);
        let x1 = first_cell(rect.x + rect.width, ppc);
        let y0 = first_cell(rect.y, ppr);
        let y1 = first_cell(rect.y + rect.height, ppr);

        self.clip(x0, y0, x1, y1)
    }

    /// Cell holding a text anchor (baseline-left pixel).
    pub fn text_cell(&self, position: Point) -> Option<(u16, u16)> {
        let col = position.x.div_euclid(i32::from(self.pixels_per_column));
        let row = (position.y - 1).div_euclid(i32::from(self.pixels_per_row));
        let cell = self.clip(col, row, col + 1, row + 1);
        (!cell.is_empty()).then_some((cell.x, cell.y))
    }

    fn clip(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> CellRect {
        let w = i32::from(self.area.width);
        let h = i32::from(self.area.height);
        let (x0, x1) = (x0.clamp(0, w), x1.clamp(0, w));
        let (y0, y1) = (y0.clamp(0, h), y1.clamp(0, h));

        CellRect::new(
            self.area.x + clamp_u16(x0),
            self.area.y + clamp_u16(y0),
            clamp_u16(x1 - x0),
            clamp_u16(y1 - y0),
        )
    }
}

/// Index of the first cell whose center is at or after `pixel`.
fn first_cell(pixel: i32, pixels_per_cell: i32) -> i32 {
    ceil_div(pixel - pixels_per_cell / 2, pixels_per_cell)
}

fn ceil_div(a: i32, b: i32) -> i32 {
    (a + b - 1).div_euclid(b)
}

fn clamp_u16(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}
