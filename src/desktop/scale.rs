use ratatui::layout::Rect;

use crate::window::decorator::ChromeMetrics;
use crate::window::{Bounds, Point, Size, Viewport};

/// Pixels covered by one terminal cell.
///
/// The window manager works in viewport pixels. A terminal cell `(c, r)`
/// stands for the pixel `(c * cell_width, r * cell_height)`, and a pixel
/// rectangle covers exactly the cells whose pixel lies inside it, so what
/// is drawn and what is hit-tested always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    pub cell_width: i32,
    pub cell_height: i32,
}

impl Default for CellScale {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

fn ceil_div(value: i32, divisor: i32) -> i32 {
    value.div_euclid(divisor) + i32::from(value.rem_euclid(divisor) != 0)
}

fn to_cell(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}

impl CellScale {
    pub fn new(cell_width: i32, cell_height: i32) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    pub fn point(self, column: u16, row: u16) -> Point {
        Point::new(
            i32::from(column) * self.cell_width,
            i32::from(row) * self.cell_height,
        )
    }

    pub fn viewport(self, area: Rect) -> Viewport {
        Viewport::new(
            i32::from(area.width) * self.cell_width,
            i32::from(area.height) * self.cell_height,
        )
    }

    /// Whole rows needed to hold `pixels`.
    pub fn rows_for(self, pixels: i32) -> u16 {
        to_cell(ceil_div(pixels.max(0), self.cell_height))
    }

    pub fn cell_rect(self, bounds: Bounds) -> Rect {
        let x0 = to_cell(ceil_div(bounds.x, self.cell_width));
        let x1 = to_cell(ceil_div(bounds.right(), self.cell_width));
        let y0 = to_cell(ceil_div(bounds.y, self.cell_height));
        let y1 = to_cell(ceil_div(bounds.bottom(), self.cell_height));
        Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// Chrome sized in whole cells: a two-row title bar whose top row is the
    /// north resize edge, one-cell handles and three-column buttons.
    pub fn chrome_metrics(self) -> ChromeMetrics {
        let cell = Size::new(self.cell_width, self.cell_height);
        ChromeMetrics {
            title_bar_height: 2 * self.cell_height,
            button_width: 3 * self.cell_width,
            button_margin: 2 * self.cell_width,
            resize_corner: cell,
            resize_edge: cell,
        }
    }
}
