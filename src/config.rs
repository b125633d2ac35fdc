//! Configuration loader, schema types and the path filter.
//!
//! This module exposes the settings that drive a sync run, helpers to load
//! them from disk, and the whitelist/blacklist `Filter` built from them.

mod filter;
mod load;
mod schema;

pub use filter::Filter;
pub use load::normalize_root;
pub use schema::*;

#[cfg(test)]
mod tests;
