// src/core/sounds.rs
use crate::core::table::{PrimaryTable, SubglyphTable};
use std::sync::OnceLock;

/// Known runes and the sound each one carries.
///
/// Consonants are drawn from the stroke keys `QWR` over `ASD`, vowels from
/// `1234` over `ZXCVF`.
pub const GLYPH_SOUNDS: &[(&str, &str)] = &[
    // consonants
    ("WRAS", "d"),
    ("QWRS", "b"),
    ("QWAS", "p"),
    ("WRS", "t"),
    ("QRAD", "k"),
    ("QWD", "g"),
    ("QRS", "f"),
    ("WAD", "v"),
    ("QWRAD", "θ"),
    ("RAS", "ð"),
    ("QWRD", "s"),
    ("QAS", "z"),
    ("WRD", "ʃ"),
    ("QWASD", "ʒ"),
    ("QRASD", "ch"),
    ("WASD", "j"),
    ("QRD", "h"),
    ("QWRASD", "ŋ"),
    ("WS", "m"),
    ("RD", "n"),
    ("QS", "l"),
    ("WRA", "r"),
    ("QD", "w"),
    ("QRA", "y"),
    // vowels
    ("12", "æ"),
    ("23", "ɑ"),
    ("34", "ɔ"),
    ("1ZX", "ay"),
    ("14", "ee"),
    ("2X", "eh"),
    ("3Z", "ih"),
    ("124", "ie"),
    ("1234", "oh"),
    ("4ZXCV", "oo"),
    ("2ZV", "ʊ"),
    ("13", "ow"),
    ("24F", "oy"),
    ("123", "uh"),
    ("234", "er"),
    ("3XF", "ar"),
    ("1F", "or"),
    ("4V", "ear"),
    ("12F", "air"),
];

/// The built-in glyph table, built on first use and shared for the
/// lifetime of the program.
pub fn primary_table() -> &'static PrimaryTable {
    static PRIMARY: OnceLock<PrimaryTable> = OnceLock::new();
    PRIMARY.get_or_init(|| {
        let table = PrimaryTable::from_entries(GLYPH_SOUNDS.iter().copied())
            .unwrap_or_else(|err| panic!("built-in glyph table is malformed: {err}"));
        tracing::debug!(entries = table.len(), "built primary glyph table");
        table
    })
}

/// The built-in table re-keyed by symbol set.
pub fn subglyph_table() -> &'static SubglyphTable {
    static SUBGLYPHS: OnceLock<SubglyphTable> = OnceLock::new();
    SUBGLYPHS.get_or_init(|| {
        let table = primary_table().subglyph_table();
        tracing::debug!(entries = table.len(), "built subglyph table");
        table
    })
}
