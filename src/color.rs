//! Color resolution for tile, stroke and background colors
//!
//! Supports the following formats:
//! - Named: `red`, `navy`, ... looked up in a [`ColorTable`]
//! - Decimal triplet: `R,G,B` with each channel 0-255 (alpha is 255)
//! - Hex: `#RRGGBB`, `#RRGGBBAA`
//! - `none`: the explicit "do not paint" sentinel

use image::Rgba;
use std::collections::BTreeMap;
use thiserror::Error;

/// Sentinel name meaning "paint nothing".
pub const NONE: &str = "none";

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Name is not in the color table and is not a literal
    #[error("unknown color '{0}'")]
    UnknownName(String),
    /// Triplet did not have exactly three channels
    #[error("'{0}': expected R,G,B triplet")]
    InvalidTriplet(String),
    /// Triplet channel was not an integer in 0..=255
    #[error("'{input}': invalid channel value '{channel}', expected 0-255")]
    InvalidChannel { input: String, channel: String },
    /// Invalid hex length (must be 6 or 8 hex chars after #)
    #[error("invalid color length {0}, expected 6 or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// A resolved paint: either nothing, or a solid RGBA color.
///
/// Kept distinct from a transparent `Rgba([0, 0, 0, 0])` so that `none`
/// and a lookup miss can never be confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paint {
    #[default]
    None,
    Solid(Rgba<u8>),
}

impl Paint {
    /// The color to write, if any.
    pub fn color(&self) -> Option<Rgba<u8>> {
        match self {
            Paint::None => None,
            Paint::Solid(c) => Some(*c),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Paint::None)
    }
}

impl From<Rgba<u8>> for Paint {
    fn from(c: Rgba<u8>) -> Self {
        Paint::Solid(c)
    }
}

const BUILTIN_COLORS: &[(&str, [u8; 3])] = &[
    ("aqua", [0, 255, 255]),
    ("black", [0, 0, 0]),
    ("blue", [0, 0, 255]),
    ("brown", [165, 42, 42]),
    ("cyan", [0, 255, 255]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("fuchsia", [255, 0, 255]),
    ("gold", [255, 215, 0]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("grey", [128, 128, 128]),
    ("indigo", [75, 0, 130]),
    ("lightblue", [173, 216, 230]),
    ("lightgray", [211, 211, 211]),
    ("lime", [0, 255, 0]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("olive", [128, 128, 0]),
    ("orange", [255, 165, 0]),
    ("pink", [255, 192, 203]),
    ("purple", [128, 0, 128]),
    ("red", [255, 0, 0]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("teal", [0, 128, 128]),
    ("violet", [238, 130, 238]),
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
];

/// Immutable name -> color mapping.
///
/// Built once at startup (built-ins plus any user-defined names) and then
/// shared by reference with every resolution site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: BTreeMap<String, Rgba<u8>>,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ColorTable {
    /// Table containing the built-in named colors.
    pub fn builtin() -> Self {
        let colors = BUILTIN_COLORS
            .iter()
            .map(|(name, [r, g, b])| (name.to_string(), Rgba([*r, *g, *b, 255])))
            .collect();
        Self { colors }
    }

    /// Built-in table extended with user-defined names.
    ///
    /// Each value must be a literal (triplet or hex) or an existing name.
    /// User names override built-ins of the same name.
    pub fn with_custom<'a, I>(custom: I) -> Result<Self, ColorError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::builtin();
        for (name, value) in custom {
            let color = match table.resolve(value)? {
                Paint::Solid(c) => c,
                Paint::None => Rgba([0, 0, 0, 0]),
            };
            table.colors.insert(name.to_ascii_lowercase(), color);
        }
        Ok(table)
    }

    /// Look up a color by name only.
    pub fn get(&self, name: &str) -> Option<Rgba<u8>> {
        self.colors.get(&name.to_ascii_lowercase()).copied()
    }

    /// All known names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Resolve a color string into a [`Paint`].
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgba;
    /// use tileimg::color::{ColorTable, Paint};
    ///
    /// let table = ColorTable::builtin();
    /// assert_eq!(table.resolve("red").unwrap(), Paint::Solid(Rgba([255, 0, 0, 255])));
    /// assert_eq!(table.resolve("75,0,0").unwrap(), Paint::Solid(Rgba([75, 0, 0, 255])));
    /// assert_eq!(table.resolve("none").unwrap(), Paint::None);
    /// assert!(table.resolve("blurple").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ColorError` for unknown names and malformed literals.
    pub fn resolve(&self, s: &str) -> Result<Paint, ColorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        if s.eq_ignore_ascii_case(NONE) {
            return Ok(Paint::None);
        }
        if let Some(c) = self.get(s) {
            return Ok(Paint::Solid(c));
        }
        if s.starts_with('#') {
            return parse_hex_color(s).map(Paint::Solid);
        }
        if s.contains(',') {
            return parse_triplet(s).map(Paint::Solid);
        }
        Err(ColorError::UnknownName(s.to_string()))
    }
}

/// Parse an `R,G,B` decimal triplet. Alpha is always 255.
pub fn parse_triplet(s: &str) -> Result<Rgba<u8>, ColorError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(ColorError::InvalidTriplet(s.to_string()));
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part.trim().parse::<u8>().map_err(|_| ColorError::InvalidChannel {
            input: s.to_string(),
            channel: part.to_string(),
        })?;
    }
    Ok(Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

/// Parse a hex color string (#RRGGBB, #RRGGBBAA)
fn parse_hex_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let hex = &s[1..];

    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }

    match hex.len() {
        6 => Ok(Rgba([
            parse_hex_pair(&hex[0..2]),
            parse_hex_pair(&hex[2..4]),
            parse_hex_pair(&hex[4..6]),
            255,
        ])),
        8 => Ok(Rgba([
            parse_hex_pair(&hex[0..2]),
            parse_hex_pair(&hex[2..4]),
            parse_hex_pair(&hex[4..6]),
            parse_hex_pair(&hex[6..8]),
        ])),
        len => Err(ColorError::InvalidLength(len)),
    }
}

/// Two already-validated ASCII hex digits to u8
fn parse_hex_pair(s: &str) -> u8 {
    u8::from_str_radix(s, 16).unwrap_or(0)
}
