//! Tile argument parsing: `[COLOR:]XRANGE,YRANGE`

use crate::color::{ColorError, ColorTable, Paint};
use crate::range::{parse_cell_range, CellRange, RangeError};
use std::fmt;
use thiserror::Error;

/// Error type for a tile argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    /// Coordinate part violates the range grammar
    #[error("invalid rectangle: {0}")]
    Range(#[from] RangeError),
    /// Color prefix could not be resolved
    #[error("invalid color: {0}")]
    Color(#[from] ColorError),
}

/// One tile to draw: a block of cells plus an optional fill override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Fill from the `COLOR:` prefix; `None` means "use the default fill"
    pub fill: Option<Paint>,
    pub range: CellRange,
}

impl Tile {
    /// Tile over `range` using the default fill.
    pub fn new(range: CellRange) -> Self {
        Self { fill: None, range }
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Parse a tile argument.
    ///
    /// Everything before the first `:` is the color, so `R,G,B` triplets
    /// work as a prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgba;
    /// use tileimg::color::{ColorTable, Paint};
    /// use tileimg::range::CellRange;
    /// use tileimg::tile::Tile;
    ///
    /// let colors = ColorTable::builtin();
    /// let tile = Tile::parse("75,0,0:0,0-3", &colors).unwrap();
    /// assert_eq!(tile.fill, Some(Paint::Solid(Rgba([75, 0, 0, 255]))));
    /// assert_eq!(tile.range, CellRange { start_col: 0, end_col: 0, start_row: 0, end_row: 3 });
    /// ```
    pub fn parse(arg: &str, colors: &ColorTable) -> Result<Self, TileError> {
        match arg.split_once(':') {
            Some((color, cells)) => {
                let fill = colors.resolve(color)?;
                let range = parse_cell_range(cells)?;
                Ok(Tile { fill: Some(fill), range })
            }
            None => Ok(Tile::new(parse_cell_range(arg)?)),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.range;
        write!(f, "{}-{},{}-{}", r.start_col, r.end_col, r.start_row, r.end_row)
    }
}

/// Parse every argument in order, stopping at the first error.
pub fn parse_tiles<I>(args: I, colors: &ColorTable) -> Result<Vec<Tile>, TileError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    args.into_iter().map(|a| Tile::parse(a.as_ref(), colors)).collect()
}
