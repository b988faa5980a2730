// --- File: src/core/table.rs
use crate::core::types::{Entry, SubglyphSet};
use crate::error::TableError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

// --- PrimaryTable: glyph code -> sound, in insertion order ---

/// Maps each glyph code to exactly one sound.
/// Entries keep the order they were inserted in.
#[derive(Debug, Clone, Default)]
pub struct PrimaryTable {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl PrimaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(code, sound)` pairs, stopping at the first bad pair.
    pub fn from_entries<I, K, V>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (code, sound) in pairs {
            table.insert(code, sound)?;
        }
        Ok(table)
    }

    /// Appends an entry. The table is left untouched on error.
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        sound: impl Into<String>,
    ) -> Result<(), TableError> {
        let glyph_code = code.into();
        let sound = sound.into();
        if glyph_code.is_empty() {
            return Err(TableError::EmptyGlyphCode { sound });
        }
        if self.index.contains_key(&glyph_code) {
            return Err(TableError::DuplicateGlyphCode(glyph_code));
        }
        self.index.insert(glyph_code.clone(), self.entries.len());
        self.entries.push(Entry { glyph_code, sound });
        Ok(())
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&idx| self.entries[idx].sound.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn subglyph_table(&self) -> SubglyphTable {
        build_subglyph_table(self)
    }
}

impl<'a> IntoIterator for &'a PrimaryTable {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for PrimaryTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.glyph_code, &entry.sound)?;
        }
        map.end()
    }
}

// --- SubglyphTable: set of symbols -> sound ---

/// Sounds keyed by the symbol set of their glyph code, so that any spelling
/// of a glyph (reordered or with repeated symbols) finds the same sound.
/// Sets keep the order they first appeared in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubglyphTable {
    order: Vec<SubglyphSet>,
    sounds: HashMap<SubglyphSet, String>,
}

impl SubglyphTable {
    pub fn get(&self, set: &SubglyphSet) -> Option<&str> {
        self.sounds.get(set).map(String::as_str)
    }

    /// Looks up a glyph code by its symbols alone.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.get(&SubglyphSet::from_code(code))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in order of first appearance of each set.
    pub fn iter(&self) -> impl Iterator<Item = (&SubglyphSet, &str)> {
        self.order
            .iter()
            .filter_map(|set| self.sounds.get(set).map(|sound| (set, sound.as_str())))
    }

    fn insert(&mut self, set: SubglyphSet, sound: String) -> Option<String> {
        if !self.sounds.contains_key(&set) {
            self.order.push(set.clone());
        }
        self.sounds.insert(set, sound)
    }
}

impl Serialize for SubglyphTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (set, sound) in self.iter() {
            map.serialize_entry(set, sound)?;
        }
        map.end()
    }
}

/// Re-keys every entry of `primary` by the set of symbols in its glyph code.
///
/// Entries are visited in insertion order; when two codes share a symbol
/// set the later one's sound wins, in the position of the earlier one.
pub fn build_subglyph_table(primary: &PrimaryTable) -> SubglyphTable {
    let mut table = SubglyphTable {
        order: Vec::with_capacity(primary.len()),
        sounds: HashMap::with_capacity(primary.len()),
    };
    for entry in primary {
        let set = SubglyphSet::from_code(&entry.glyph_code);
        if let Some(previous) = table.insert(set, entry.sound.clone()) {
            tracing::debug!(
                glyph = %entry.glyph_code,
                replaced = %previous,
                sound = %entry.sound,
                "subglyph set collision, later entry wins"
            );
        }
    }
    table
}
