//! Library indexing: tag reading, normalization, and the artist catalog.
//!
//! `scan::Indexer` walks the sources and feeds each file through the
//! `metadata::MetadataReader`; the result is a `model::Catalog` of artists
//! and their de-duplicated tracks.

mod metadata;
mod model;
mod scan;

pub use metadata::*;
pub use model::*;
pub use scan::*;

#[cfg(test)]
pub(crate) mod testing;
