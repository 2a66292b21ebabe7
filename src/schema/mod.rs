//! Per-namespace symbol indexing.
//!
//! One [`Schema`] is created for every `Schema` element in the metadata
//! document. Each symbol kind (entity sets, entity types, functions,
//! complex types) is held in a [`NameIndex`]: insertion-ordered by exact
//! name with a parallel case-insensitive lookup map.

mod index;
mod table;

pub use index::NameIndex;
pub use table::Schema;
