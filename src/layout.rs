//! Destination layout: identifiers, copy-if-stale, and title prefixes.
//!
//! Files land at `<root>/<Artist>/<YYY>_<Album>_<TTT>_<file name>`, where
//! the zero-padded fields are sized per artist so a plain name sort gives
//! newest year first, then album, then track.

mod identifier;
mod title;
mod write;

pub use title::*;
pub use write::*;
