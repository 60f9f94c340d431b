//! Border and decoration glyphs used to draw a menu.
//!
//! A glyph table is a 5x5 block of characters read row by row. Only some
//! positions are used by the renderer; the catalog module documents the layout.

mod catalog;

pub use catalog::design_count;

use crate::error::ConfigurationError;
use catalog::{design_glyphs, DESIGN_SIDE};

/// Number of glyphs in one table.
pub const GLYPH_TABLE_LEN: usize = DESIGN_SIDE * DESIGN_SIDE;

/// Id of the design used when none is configured.
pub const DEFAULT_DESIGN_ID: usize = 1;

/// How the glyph table of a menu is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Design {
    /// 1-based id into the built-in catalog.
    Id(usize),
    /// Literal table of exactly [`GLYPH_TABLE_LEN`] characters.
    Literal(String),
}

impl Default for Design {
    fn default() -> Self {
        Design::Id(DEFAULT_DESIGN_ID)
    }
}

/// Resolved glyphs for one visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: [char; GLYPH_TABLE_LEN],
}

/// Look up a catalog design by its 1-based id.
pub fn glyph_table(id: usize) -> Result<GlyphTable, ConfigurationError> {
    let available = design_count();
    let out_of_range = ConfigurationError::DesignOutOfRange { id, available };
    if id == 0 || id > available {
        return Err(out_of_range);
    }
    let glyphs = design_glyphs(id - 1).ok_or(out_of_range)?;
    GlyphTable::from_chars(&glyphs)
}

impl GlyphTable {
    /// Resolve a [`Design`] to its glyphs.
    pub fn for_design(design: &Design) -> Result<Self, ConfigurationError> {
        match design {
            Design::Id(id) => glyph_table(*id),
            Design::Literal(text) => Self::from_design_string(text),
        }
    }

    /// Build a table from a literal string such as `"┌──┬┐├/\┼┤│ )│││[]││└\/┴┘"`.
    pub fn from_design_string(text: &str) -> Result<Self, ConfigurationError> {
        let glyphs: Vec<char> = text.chars().collect();
        Self::from_chars(&glyphs)
    }

    fn from_chars(chars: &[char]) -> Result<Self, ConfigurationError> {
        let glyphs: [char; GLYPH_TABLE_LEN] =
            chars
                .try_into()
                .map_err(|_| ConfigurationError::DesignLength {
                    expected: GLYPH_TABLE_LEN,
                    actual: chars.len(),
                })?;
        Ok(Self { glyphs })
    }

    #[inline]
    fn at(&self, row: usize, column: usize) -> char {
        self.glyphs[row * DESIGN_SIDE + column]
    }

    pub fn top_left(&self) -> char {
        self.at(0, 0)
    }

    pub fn top_right(&self) -> char {
        self.at(0, 4)
    }

    /// Horizontal line of the outer top and bottom borders.
    pub fn horizontal(&self) -> char {
        self.at(0, 1)
    }

    /// Horizontal line of the separator under the header.
    pub fn inner_horizontal(&self) -> char {
        self.at(0, 2)
    }

    pub fn header_left(&self) -> char {
        self.at(1, 0)
    }

    pub fn header_right(&self) -> char {
        self.at(1, 4)
    }

    /// Two glyphs shown on the top edge while rows are hidden above.
    pub fn scroll_up(&self) -> [char; 2] {
        [self.at(1, 1), self.at(1, 2)]
    }

    pub fn vertical_left(&self) -> char {
        self.at(2, 0)
    }

    pub fn vertical_right(&self) -> char {
        self.at(2, 4)
    }

    /// Glyphs wrapped around the hotkey of a row that is not current.
    pub fn unselected(&self) -> [char; 2] {
        [self.at(2, 1), self.at(2, 2)]
    }

    /// Glyphs wrapped around the hotkey of the current row.
    pub fn selected(&self) -> [char; 2] {
        [self.at(3, 1), self.at(3, 2)]
    }

    pub fn bottom_left(&self) -> char {
        self.at(4, 0)
    }

    pub fn bottom_right(&self) -> char {
        self.at(4, 4)
    }

    /// Two glyphs shown on the bottom edge while rows are hidden below.
    pub fn scroll_down(&self) -> [char; 2] {
        [self.at(4, 1), self.at(4, 2)]
    }

    /// The table as a 5-line block, useful for previews.
    pub fn preview(&self) -> String {
        self.glyphs
            .chunks(DESIGN_SIDE)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        // The catalog always carries the default design.
        glyph_table(DEFAULT_DESIGN_ID).unwrap_or(Self {
            glyphs: [' '; GLYPH_TABLE_LEN],
        })
    }
}
