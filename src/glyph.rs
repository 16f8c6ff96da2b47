//! Star font for large digit rendering.
//!
//! Every glyph is `GLYPH_HEIGHT` rows of exactly `GLYPH_WIDTH` columns. A `*`
//! is a stroke and a space is empty. Only the ten digits have strokes; every
//! other character draws as the blank glyph.

use crate::consts::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Rows of a single glyph.
pub type GlyphRows = [&'static str; GLYPH_HEIGHT];

/// The character that separates digit groups.
pub const SEPARATOR: char = ' ';

/// A character of the star font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// A decimal digit, always `0..=9`.
    Digit(u8),
    Blank,
}

static DIGITS: [GlyphRows; 10] = [
    [" *** ", "*   *", "*   *", "*   *", "*   *", "*   *", " *** "],
    ["  *  ", " **  ", "* *  ", "  *  ", "  *  ", "  *  ", "*****"],
    [" *** ", "*   *", "    *", "   * ", "  *  ", " *   ", "*****"],
    [" *** ", "*   *", "    *", "  ** ", "    *", "*   *", " *** "],
    ["   * ", "  ** ", " * * ", "*  * ", "*****", "   * ", "   * "],
    ["*****", "*    ", "*    ", " *** ", "    *", "*   *", " *** "],
    [" *** ", "*   *", "*    ", "**** ", "*   *", "*   *", " *** "],
    ["*****", "    *", "   * ", "  *  ", " *   ", " *   ", " *   "],
    [" *** ", "*   *", "*   *", " *** ", "*   *", "*   *", " *** "],
    [" *** ", "*   *", "*   *", " ****", "    *", "*   *", " *** "],
];

static BLANK: GlyphRows = ["     "; GLYPH_HEIGHT];

impl Glyph {
    /// Total lookup: digits map to their glyph, anything else is blank.
    pub fn from_char(ch: char) -> Self {
        match ch.to_digit(10) {
            // to_digit(10) is at most 9
            Some(d) => Self::Digit(d as u8),
            None => Self::Blank,
        }
    }

    pub fn rows(self) -> &'static GlyphRows {
        let rows = match self {
            Self::Digit(d) => DIGITS.get(usize::from(d)).unwrap_or(&BLANK),
            Self::Blank => &BLANK,
        };
        debug_assert!(
            rows.iter().all(|row| row.len() == GLYPH_WIDTH),
            "glyph {self:?} has inconsistent row widths",
        );
        rows
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Rows for `ch`, falling back to the blank glyph.
pub fn glyph_rows(ch: char) -> &'static GlyphRows {
    Glyph::from_char(ch).rows()
}

/// Whether `ch` marks a boundary between digit groups.
///
/// Only the literal separator counts. Unsupported characters still draw as
/// blank but keep digit spacing.
pub const fn is_separator(ch: char) -> bool {
    ch == SEPARATOR
}
