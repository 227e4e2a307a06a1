//! Coordinate token parsing.
//!
//! Grammar:
//!
//! ```text
//! CELLS := TOKEN "," TOKEN        (x-range, y-range)
//! TOKEN := INT | INT "-" INT
//! ```
//!
//! A scalar token `n` is the range `n-n`. The hyphen doubles as the range
//! separator, so negative numbers cannot be written.

use crate::grid::CellCoord;
use thiserror::Error;

/// Error type for malformed coordinate tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Cell spec had no comma separating x and y
    #[error("'{0}': must be comma separated X,Y")]
    MissingComma(String),
    /// Cell spec had more than one comma
    #[error("'{0}': expected exactly 2 comma separated values, found {1}")]
    TooManyParts(String, usize),
    /// Token had more than one hyphen
    #[error("'{0}': a range must be START-END")]
    MalformedRange(String),
    /// A numeric part was empty or not an integer
    #[error("'{token}': invalid integer '{part}'")]
    InvalidNumber { token: String, part: String },
}

/// A rectangular block of cells, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub start_col: i32,
    pub end_col: i32,
    pub start_row: i32,
    pub end_row: i32,
}

impl CellRange {
    /// A range covering one cell.
    pub fn single(col: i32, row: i32) -> Self {
        Self { start_col: col, end_col: col, start_row: row, end_row: row }
    }

    /// Top-left cell of the range.
    pub fn start(&self) -> CellCoord {
        CellCoord::new(self.start_col, self.start_row)
    }

    /// Bottom-right cell of the range.
    pub fn end(&self) -> CellCoord {
        CellCoord::new(self.end_col, self.end_row)
    }
}

/// Parse one axis token (`"3"` or `"1-4"`) into `(start, end)`.
///
/// # Examples
///
/// ```
/// use tileimg::range::parse_range_token;
///
/// assert_eq!(parse_range_token("3").unwrap(), (3, 3));
/// assert_eq!(parse_range_token("1-4").unwrap(), (1, 4));
/// assert!(parse_range_token("1-4-7").is_err());
/// ```
pub fn parse_range_token(token: &str) -> Result<(i32, i32), RangeError> {
    let parts: Vec<&str> = token.split('-').collect();
    match parts.as_slice() {
        [value] => {
            let v = parse_int(token, value)?;
            Ok((v, v))
        }
        [start, end] => Ok((parse_int(token, start)?, parse_int(token, end)?)),
        _ => Err(RangeError::MalformedRange(token.to_string())),
    }
}

/// Parse a full cell spec (`"X,Y"` where each side may be a range).
///
/// # Examples
///
/// ```
/// use tileimg::range::{parse_cell_range, CellRange};
///
/// let range = parse_cell_range("0-2,3").unwrap();
/// assert_eq!(range, CellRange { start_col: 0, end_col: 2, start_row: 3, end_row: 3 });
/// ```
pub fn parse_cell_range(spec: &str) -> Result<CellRange, RangeError> {
    let parts: Vec<&str> = spec.split(',').collect();
    let (xs, ys) = match parts.as_slice() {
        [_] => return Err(RangeError::MissingComma(spec.to_string())),
        [x, y] => (*x, *y),
        _ => return Err(RangeError::TooManyParts(spec.to_string(), parts.len())),
    };

    let (start_col, end_col) = parse_range_token(xs)?;
    let (start_row, end_row) = parse_range_token(ys)?;
    Ok(CellRange { start_col, end_col, start_row, end_row })
}

fn parse_int(token: &str, part: &str) -> Result<i32, RangeError> {
    part.parse::<i32>().map_err(|_| RangeError::InvalidNumber {
        token: token.to_string(),
        part: part.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_token() {
        assert_eq!(parse_range_token("3"), Ok((3, 3)));
        assert_eq!(parse_range_token("0"), Ok((0, 0)));
    }

    #[test]
    fn test_range_token() {
        assert_eq!(parse_range_token("1-4"), Ok((1, 4)));
        assert_eq!(parse_range_token("4-1"), Ok((4, 1)));
    }

    #[test]
    fn test_range_token_too_many_hyphens() {
        assert_eq!(
            parse_range_token("1-4-7"),
            Err(RangeError::MalformedRange("1-4-7".to_string()))
        );
    }

    #[test]
    fn test_range_token_negative_rejected() {
        // "-3" splits into "" and "3"
        assert!(matches!(
            parse_range_token("-3"),
            Err(RangeError::InvalidNumber { ref part, .. }) if part.is_empty()
        ));
    }

    #[test]
    fn test_range_token_not_numeric() {
        assert!(matches!(parse_range_token("a"), Err(RangeError::InvalidNumber { .. })));
        assert!(matches!(parse_range_token("1-b"), Err(RangeError::InvalidNumber { .. })));
        assert!(matches!(parse_range_token(""), Err(RangeError::InvalidNumber { .. })));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(matches!(parse_range_token(" 1"), Err(RangeError::InvalidNumber { .. })));
        assert!(matches!(parse_range_token("1- 2"), Err(RangeError::InvalidNumber { .. })));
        assert!(matches!(parse_cell_range("1, 2"), Err(RangeError::InvalidNumber { .. })));
    }

    #[test]
    fn test_cell_range_scalar() {
        let range = parse_cell_range("1,2").unwrap();
        assert_eq!(range, CellRange::single(1, 2));
        assert_eq!(range.start(), CellCoord::new(1, 2));
        assert_eq!(range.end(), CellCoord::new(1, 2));
    }

    #[test]
    fn test_cell_range_both_axes() {
        let range = parse_cell_range("1-2,0-3").unwrap();
        assert_eq!(range.start(), CellCoord::new(1, 0));
        assert_eq!(range.end(), CellCoord::new(2, 3));
    }

    #[test]
    fn test_cell_range_missing_comma() {
        assert_eq!(parse_cell_range("12"), Err(RangeError::MissingComma("12".to_string())));
    }

    #[test]
    fn test_cell_range_extra_comma() {
        assert_eq!(
            parse_cell_range("1,2,3"),
            Err(RangeError::TooManyParts("1,2,3".to_string(), 3))
        );
    }

    #[test]
    fn test_cell_range_bad_axis() {
        assert!(parse_cell_range("1,x").is_err());
        assert!(parse_cell_range("1-2-3,0").is_err());
    }

    #[test]
    fn test_error_message_names_token() {
        let err = parse_cell_range("1,q").unwrap_err();
        assert_eq!(err.to_string(), "'q': invalid integer 'q'");
    }
}
