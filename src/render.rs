//! Composes star glyphs into a seven-line block.

use std::fmt;

use crate::consts::{DEFAULT_DIGIT_SPACING, DEFAULT_GROUP_SPACING, GLYPH_HEIGHT, GLYPH_STROKE};
use crate::glyph::{glyph_rows, is_separator};

/// Spacing and stroke settings for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces between two adjacent non-separator characters.
    pub digit_spacing: usize,
    /// Spaces between a separator and its neighbours.
    pub group_spacing: usize,
    /// Character drawn for every stroke of a glyph.
    pub fill: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            digit_spacing: DEFAULT_DIGIT_SPACING,
            group_spacing: DEFAULT_GROUP_SPACING,
            fill: GLYPH_STROKE,
        }
    }
}

/// Seven rendered rows. `Display` joins them with newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlock {
    rows: [String; GLYPH_HEIGHT],
}

impl RenderedBlock {
    pub const fn rows(&self) -> &[String; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Width in characters; every row has the same width.
    pub fn width(&self) -> usize {
        self.rows[0].chars().count()
    }
}

impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Renders `text` as star glyphs.
///
/// Between two characters the gap is `group_spacing` wide when either of them
/// is the group separator, otherwise `digit_spacing`. There is no gap after
/// the last character, and empty text yields seven empty rows.
pub fn render(text: &str, options: &RenderOptions) -> RenderedBlock {
    let mut block = RenderedBlock::default();
    let mut chars = text.chars().peekable();
    let mut count = 0usize;

    while let Some(ch) = chars.next() {
        let gap = chars.peek().map(|&next| {
            if is_separator(ch) || is_separator(next) {
                options.group_spacing
            } else {
                options.digit_spacing
            }
        });

        for (row, line) in block.rows.iter_mut().zip(glyph_rows(ch)) {
            if options.fill == GLYPH_STROKE {
                row.push_str(line);
            } else {
                row.extend(line.chars().map(|c| if c == GLYPH_STROKE { options.fill } else { c }));
            }
            if let Some(gap) = gap {
                row.extend(std::iter::repeat_n(' ', gap));
            }
        }
        count += 1;
    }

    tracing::debug!(
        chars = count,
        digit_spacing = options.digit_spacing,
        group_spacing = options.group_spacing,
        width = block.width(),
        "rendered star block"
    );
    block
}

/// Renders `text` with the given spacing and returns the joined rows.
pub fn render_star_number_string(text: &str, digit_spacing: usize, group_spacing: usize) -> String {
    let options = RenderOptions {
        digit_spacing,
        group_spacing,
        ..RenderOptions::default()
    };
    render(text, &options).to_string()
}
