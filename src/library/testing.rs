//! In-memory metadata sources and small audio fixtures for tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::Filter;

use super::metadata::{MetadataReader, MetadataSource, RawTags};
use super::model::Catalog;
use super::scan::Indexer;

/// Answers by file name; files it doesn't know are "not audio".
#[derive(Default, Clone)]
pub struct StubSource {
    by_name: HashMap<String, RawTags>,
}

impl StubSource {
    pub fn with(mut self, file_name: &str, tags: RawTags) -> Self {
        self.by_name.insert(file_name.to_string(), tags);
        self
    }
}

impl MetadataSource for StubSource {
    fn read(&self, path: &Path) -> Option<RawTags> {
        let name = path.file_name()?.to_str()?;
        self.by_name.get(name).cloned()
    }
}

pub fn tags(artist: &str, album: &str, title: &str, track: &str, year: &str) -> RawTags {
    let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
    RawTags {
        artist: opt(artist),
        album: opt(album),
        title: opt(title),
        track: opt(track),
        year: opt(year),
    }
}

/// A reader whose secondary source knows nothing.
pub fn reader(primary: StubSource) -> MetadataReader {
    MetadataReader::new(Box::new(primary), Box::new(StubSource::default()))
}

pub fn index<P: AsRef<Path>>(roots: &[P], filter: &Filter, reader: &MetadataReader) -> Catalog {
    Indexer::new(filter, reader).index(roots)
}

/// Twenty silent MPEG-1 Layer III frames (128 kbit/s, 44.1 kHz), untagged.
pub fn write_mpeg(path: &Path) {
    let mut body = Vec::with_capacity(20 * 417);
    for _ in 0..20 {
        body.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        body.extend_from_slice(&[0; 413]);
    }
    fs::write(path, body).unwrap();
}

/// [`write_mpeg`], then an ID3v2.4 tag: Band / Record / Song, track 3,
/// recorded 2012-07-04.
pub fn write_tagged_mpeg(path: &Path) {
    use id3::TagLike;

    write_mpeg(path);
    let mut tag = id3::Tag::new();
    tag.set_artist("Band");
    tag.set_album("Record");
    tag.set_title("Song");
    tag.set_track(3);
    tag.set_date_recorded("2012-07-04".parse().unwrap());
    tag.write_to_path(path, id3::Version::Id3v24).unwrap();
}
