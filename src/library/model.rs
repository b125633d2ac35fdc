use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::PathBuf;

pub const UNKNOWN: &str = "Unknown";

/// Make `name` usable as a single path segment.
///
/// Reserved characters and names are stripped; if nothing usable is left the
/// segment becomes `Unknown`.
pub fn sanitize_segment(name: &str) -> String {
    let cleaned = sanitize_filename::sanitize(name);
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        UNKNOWN.to_string()
    } else {
        cleaned.to_string()
    }
}

/// One audio file as it will appear in the destination layout.
#[derive(Debug, Clone)]
pub struct Track {
    /// Sanitized album name.
    pub album: String,
    pub title: String,
    pub track_number: u32,
    pub year: i32,
    pub source_path: PathBuf,
}

impl Track {
    pub fn new(
        album: &str,
        title: String,
        track_number: u32,
        year: i32,
        source_path: PathBuf,
    ) -> Self {
        Self {
            album: sanitize_segment(album),
            title,
            track_number,
            year,
            source_path,
        }
    }
}

/// Tracks are the same slot in an artist's discography when album and track
/// number match; title, year and path are ignored.
impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.album == other.album && self.track_number == other.track_number
    }
}

impl Eq for Track {}

#[derive(Debug, Clone)]
pub struct Artist {
    /// Sanitized display name, first-seen casing.
    pub name: String,
    tracks: Vec<Track>,
}

impl Artist {
    pub fn new(name: &str) -> Self {
        Self {
            name: sanitize_segment(name),
            tracks: Vec::new(),
        }
    }

    /// Append `track` unless an equal track is already present.
    ///
    /// Returns `false` when the track was dropped as a duplicate.
    pub fn add_track(&mut self, track: Track) -> bool {
        if self.tracks.contains(&track) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Tracks in discovery order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

/// Artists keyed by lower-cased name, iterated in key order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artists: BTreeMap<String, Artist>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the artist case-insensitively, creating it on first sight.
    pub fn artist_mut(&mut self, name: &str) -> &mut Artist {
        let artist = Artist::new(name);
        match self.artists.entry(artist.name.to_lowercase()) {
            btree_map::Entry::Occupied(e) => e.into_mut(),
            btree_map::Entry::Vacant(e) => e.insert(artist),
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Artist> {
        self.artists.get(&sanitize_segment(name).to_lowercase())
    }

    pub fn artists(&self) -> impl Iterator<Item = &Artist> {
        self.artists.values()
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn track_count(&self) -> usize {
        self.artists.values().map(|a| a.tracks.len()).sum()
    }
}
