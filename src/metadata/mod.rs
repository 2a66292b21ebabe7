//! EDMX document walking and symbol-table construction.
//!
//! The entry point is [`MetadataSymbolTable`]: one blocking pass over an
//! already-parsed metadata document, building every schema's symbol index
//! along the way. Construction is all-or-nothing; after it returns, the
//! table never mutates and is safe for concurrent reads.

mod table;
mod walk;

pub use table::MetadataSymbolTable;
