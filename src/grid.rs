//! Grid geometry: mapping logical cells to pixel rectangles.
//!
//! A [`GridSpec`] partitions the canvas into `columns x rows` cells of
//! `width / columns` by `height / rows` pixels (integer division). Each cell is
//! shrunk inward by `pad` pixels on every side.
//!
//! Mapping is pure arithmetic. Out-of-range or negative cells produce
//! rectangles outside the canvas, and oversized padding produces inverted
//! rectangles; neither is an error here. The renderer treats both as no-ops.

/// Canvas size and logical grid partition for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of grid columns (must be > 0)
    pub columns: u32,
    /// Number of grid rows (must be > 0)
    pub rows: u32,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Inward margin applied to every side of a cell
    pub pad: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { columns: 4, rows: 4, width: 200, height: 200, pad: 5 }
    }
}

/// Logical grid address. Column is x, row is y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub col: i32,
    pub row: i32,
}

impl CellCoord {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Axis-aligned rectangle in pixel space, half-open: `[min_x, max_x) x [min_y, max_y)`.
///
/// Not normalized. A rectangle with `min >= max` on either axis is degenerate
/// and covers no pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl PixelRect {
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Width in pixels; negative for reversed rectangles.
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    /// Height in pixels; negative for reversed rectangles.
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// Check whether a pixel lies inside the rectangle.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }
}

impl GridSpec {
    /// Cell width in pixels (truncating division).
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero. Validated configs never reach this.
    pub fn cell_width(&self) -> i64 {
        i64::from(self.width) / i64::from(self.columns)
    }

    /// Cell height in pixels (truncating division).
    ///
    /// # Panics
    ///
    /// Panics if `rows` is zero. Validated configs never reach this.
    pub fn cell_height(&self) -> i64 {
        i64::from(self.height) / i64::from(self.rows)
    }

    /// Map a single cell to its padded pixel rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileimg::grid::{CellCoord, GridSpec, PixelRect};
    ///
    /// let grid = GridSpec::default();
    /// let rect = grid.cell_rect(CellCoord::new(0, 0));
    /// assert_eq!(rect, PixelRect::new(5, 5, 45, 45));
    /// ```
    pub fn cell_rect(&self, cell: CellCoord) -> PixelRect {
        let cw = self.cell_width();
        let ch = self.cell_height();
        let pad = i64::from(self.pad);
        let col = i64::from(cell.col);
        let row = i64::from(cell.row);

        PixelRect {
            min_x: col * cw + pad,
            min_y: row * ch + pad,
            max_x: (col + 1) * cw - pad,
            max_y: (row + 1) * ch - pad,
        }
    }

    /// Merge a span of cells into one rectangle.
    ///
    /// The result takes its top-left corner from `start`'s rectangle and its
    /// bottom-right corner from `end`'s rectangle. This is positional, not a
    /// min/max over both rectangles: a reversed span (end before start) comes
    /// out inverted and draws nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileimg::grid::{CellCoord, GridSpec, PixelRect};
    ///
    /// let grid = GridSpec::default();
    /// let rect = grid.span_rect(CellCoord::new(1, 0), CellCoord::new(2, 0));
    /// assert_eq!(rect, PixelRect::new(55, 5, 145, 45));
    /// ```
    pub fn span_rect(&self, start: CellCoord, end: CellCoord) -> PixelRect {
        let first = self.cell_rect(start);
        let last = self.cell_rect(end);
        PixelRect {
            min_x: first.min_x,
            min_y: first.min_y,
            max_x: last.max_x,
            max_y: last.max_y,
        }
    }
}
