//! Dual exact/case-insensitive symbol index.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::error::MetadataError;

/// An insertion-ordered symbol index with exact and case-insensitive
/// lookup over the same entries.
///
/// The exact-name map doubles as the ordered list: iteration yields
/// symbols in declaration order. The lowercase map points back into it by
/// slot. A name that differs from an existing entry only by case collides
/// in the lowercase map and is rejected like an exact duplicate:
/// case-insensitive lookup is a first-class feature, so two same-kind
/// symbols distinguishable only by case cannot coexist in one schema.
#[derive(Debug, Clone)]
pub struct NameIndex<T> {
    /// Symbol kind, used in duplicate errors ("EntityType", "Function", ...).
    kind: &'static str,
    by_name_exact: IndexMap<String, T>,
    by_name_lower: FxHashMap<String, usize>,
}

impl<T> NameIndex<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            by_name_exact: IndexMap::new(),
            by_name_lower: FxHashMap::default(),
        }
    }

    /// Register a symbol under `name`. Fails when either the exact or the
    /// lowercased key is already taken; a half-indexed symbol is never
    /// left behind.
    pub fn insert(&mut self, name: &str, namespace: &str, value: T) -> Result<(), MetadataError> {
        let lower = name.to_lowercase();
        if self.by_name_exact.contains_key(name) || self.by_name_lower.contains_key(&lower) {
            return Err(MetadataError::duplicate(self.kind, name, namespace));
        }
        let (slot, _) = self.by_name_exact.insert_full(name.to_string(), value);
        self.by_name_lower.insert(lower, slot);
        Ok(())
    }

    /// Case-insensitive lookup. Absence is a normal outcome, not an error.
    pub fn by_name(&self, name: &str) -> Option<&T> {
        let slot = *self.by_name_lower.get(&name.to_lowercase())?;
        self.by_name_exact.get_index(slot).map(|(_, v)| v)
    }

    /// Exact-case lookup.
    pub fn by_name_exact(&self, name: &str) -> Option<&T> {
        self.by_name_exact.get(name)
    }

    /// Symbols in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.by_name_exact.values()
    }

    pub fn len(&self) -> usize {
        self.by_name_exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name_exact.is_empty()
    }
}
