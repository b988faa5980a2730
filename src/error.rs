// File: src/error.rs
use thiserror::Error;

/// Failures while assembling a glyph table from raw pairs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A glyph code must carry at least one symbol.
    #[error("empty glyph code for sound {sound:?}")]
    EmptyGlyphCode { sound: String },

    /// Each glyph code maps to exactly one sound.
    #[error("duplicate glyph code {0:?}")]
    DuplicateGlyphCode(String),
}
