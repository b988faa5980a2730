// src/lib.rs

pub mod core;
pub mod error;
pub use crate::core::sounds::{primary_table, subglyph_table, GLYPH_SOUNDS};
pub use crate::core::table::{build_subglyph_table, PrimaryTable, SubglyphTable};
pub use crate::core::types::{canonical_code, Entry, GlyphHalf, SubglyphSet};
pub use crate::error::TableError;
