use std::path::Path;

use log::{debug, warn};
use walkdir::WalkDir;

use crate::config::Filter;

use super::metadata::MetadataReader;
use super::model::{Catalog, Track, UNKNOWN};

pub const DEFAULT_TRACK: u32 = 1;
pub const DEFAULT_YEAR: i32 = 2000;

/// Builds a [`Catalog`] from source directories.
pub struct Indexer<'a> {
    filter: &'a Filter,
    reader: &'a MetadataReader,
    follow_links: bool,
}

impl<'a> Indexer<'a> {
    pub fn new(filter: &'a Filter, reader: &'a MetadataReader) -> Self {
        Self {
            filter,
            reader,
            follow_links: true,
        }
    }

    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Walk every root depth-first and return the catalog.
    ///
    /// Children are visited in file name order, which makes "first seen"
    /// deterministic when two files claim the same album and track.
    pub fn index<P: AsRef<Path>>(&self, roots: &[P]) -> Catalog {
        let mut catalog = Catalog::new();
        for root in roots {
            self.index_directory(&mut catalog, root.as_ref());
        }
        catalog
    }

    fn index_directory(&self, catalog: &mut Catalog, root: &Path) {
        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !e.file_type().is_dir() || !self.filter.blacklisted(e.path())
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let at = err.path().unwrap_or(root);
                    warn!("Skipping {}: {err}", at.display());
                    continue;
                }
            };
            if entry.file_type().is_file() {
                self.index_file(catalog, entry.path());
            }
        }
    }

    /// Add one file to `catalog`. Returns whether it produced a track
    /// (including one dropped as a duplicate).
    pub fn index_file(&self, catalog: &mut Catalog, path: &Path) -> bool {
        if !self.filter.file_allowed(path) {
            return false;
        }
        let Some(record) = self.reader.read(path) else {
            debug!("Skipping {}: not a readable audio track", path.display());
            return false;
        };

        for field in record.missing() {
            warn!("{} doesn't have a detected {}.", path.display(), field.describe());
        }

        let artist = record.artist.unwrap_or_else(|| UNKNOWN.to_string());
        let album = record.album.unwrap_or_else(|| UNKNOWN.to_string());
        let title = record.title.unwrap_or_else(|| UNKNOWN.to_string());
        let track = record.track.unwrap_or(DEFAULT_TRACK);
        let year = record.year.unwrap_or(DEFAULT_YEAR);

        let added = catalog
            .artist_mut(artist.trim())
            .add_track(Track::new(&album, title, track, year, path.to_path_buf()));
        if !added {
            debug!("Skipping {}: duplicate of an earlier track", path.display());
        }
        true
    }
}
