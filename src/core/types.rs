// src/core/types.rs
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// A glyph transcribed as the keyboard symbols of its strokes, e.g. "WRAS".
pub type GlyphCode = String;

/// A phonetic fragment, e.g. "oh" or "ʃ".
pub type Sound = String;

/// The sixteen stroke symbols in keyboard order. The first eight draw the
/// top half of a rune, the last eight the bottom half.
pub const KEYBOARD_ORDER: &str = "1234QWERASDFZXCV";

const TOP_SYMBOLS: &str = "1234QWER";
const BOTTOM_SYMBOLS: &str = "ASDFZXCV";

/// One row of the primary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub glyph_code: GlyphCode,
    pub sound: Sound,
}

/// Which half of a rune a stroke symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphHalf {
    Top,
    Bottom,
}

impl GlyphHalf {
    pub fn of(symbol: char) -> Option<Self> {
        if TOP_SYMBOLS.contains(symbol) {
            Some(GlyphHalf::Top)
        } else if BOTTOM_SYMBOLS.contains(symbol) {
            Some(GlyphHalf::Bottom)
        } else {
            None
        }
    }
}

/// Sort key placing symbols in keyboard order. Symbols outside the
/// alphabet sort first, by code point.
fn keyboard_rank(symbol: char) -> (Option<usize>, char) {
    (KEYBOARD_ORDER.find(symbol), symbol)
}

/// The distinct symbols of a glyph code, ignoring order and repetition.
///
/// Two codes are the same subglyph set iff they use the same symbols, so
/// "QWRS", "SWRQ" and "QQWRS" all compare equal and hash alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubglyphSet {
    symbols: BTreeSet<char>,
}

impl SubglyphSet {
    pub fn from_code(code: &str) -> Self {
        code.chars().collect()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in keyboard order.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        let mut ordered: Vec<char> = self.symbols.iter().copied().collect();
        ordered.sort_by_key(|&c| keyboard_rank(c));
        ordered.into_iter()
    }

    pub fn top_half(&self) -> Self {
        self.restricted_to(GlyphHalf::Top)
    }

    pub fn bottom_half(&self) -> Self {
        self.restricted_to(GlyphHalf::Bottom)
    }

    fn restricted_to(&self, half: GlyphHalf) -> Self {
        self.symbols
            .iter()
            .copied()
            .filter(|&c| GlyphHalf::of(c) == Some(half))
            .collect()
    }
}

impl FromIterator<char> for SubglyphSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self { symbols: iter.into_iter().collect() }
    }
}

impl fmt::Display for SubglyphSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl Serialize for SubglyphSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deduplicates the symbols of a glyph code and sorts them in keyboard order.
pub fn canonical_code(code: &str) -> String {
    SubglyphSet::from_code(code).to_string()
}
