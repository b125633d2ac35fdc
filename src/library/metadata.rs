//! Tag reading with a primary and a secondary source.
//!
//! - [`MetadataSource`] is the seam: anything that can turn a path into
//!   [`RawTags`]. The real sources are [`LoftySource`] and [`Id3Source`].
//! - [`TagRecord`] is the typed, coerced view; [`TagRecord::merge`] fills
//!   gaps from another record without overriding present fields.
//! - [`MetadataReader`] runs the primary, then asks the secondary only when
//!   something is still missing.

use std::path::Path;
use std::sync::LazyLock;

use lofty::prelude::*;
use lofty::tag::ItemKey;
use regex::Regex;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("static regex"));

/// Tag values as a source reports them, before any coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTags {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    pub track: Option<String>,
    pub year: Option<String>,
}

/// Something that can read tags from a file.
///
/// `None` means the file is not a readable audio track.
pub trait MetadataSource {
    fn read(&self, path: &Path) -> Option<RawTags>;
}

/// Fields of a [`TagRecord`], used to report what had to be defaulted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TagField {
    Artist,
    Album,
    Title,
    Track,
    Year,
}

impl TagField {
    pub fn describe(self) -> &'static str {
        match self {
            TagField::Artist => "artist name",
            TagField::Album => "album name",
            TagField::Title => "title",
            TagField::Track => "track number",
            TagField::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRecord {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    pub track: Option<u32>,
    pub year: Option<i32>,
}

impl TagRecord {
    pub fn from_raw(raw: RawTags) -> Self {
        Self {
            artist: non_blank(raw.artist),
            album: non_blank(raw.album),
            title: non_blank(raw.title),
            track: raw.track.as_deref().and_then(coerce_track),
            year: raw.year.as_deref().and_then(coerce_year),
        }
    }

    /// Fill every absent field from `other`; present fields are never
    /// replaced.
    pub fn merge(self, other: TagRecord) -> TagRecord {
        TagRecord {
            artist: self.artist.or(other.artist),
            album: self.album.or(other.album),
            title: self.title.or(other.title),
            track: self.track.or(other.track),
            year: self.year.or(other.year),
        }
    }

    pub fn missing(&self) -> Vec<TagField> {
        let mut out = Vec::new();
        if self.artist.is_none() {
            out.push(TagField::Artist);
        }
        if self.album.is_none() {
            out.push(TagField::Album);
        }
        if self.title.is_none() {
            out.push(TagField::Title);
        }
        if self.track.is_none() {
            out.push(TagField::Track);
        }
        if self.year.is_none() {
            out.push(TagField::Year);
        }
        out
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse a track number; `"3/12"` yields 3. Zero counts as absent.
pub fn coerce_track(raw: &str) -> Option<u32> {
    let first = raw.split('/').next()?.trim();
    first.parse::<u32>().ok().filter(|n| *n >= 1)
}

/// Parse a year. Timestamps and other decorated values fall back to the
/// first run of digits, so `"2012-07-04T00:00:00"` yields 2012.
pub fn coerce_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    raw.parse::<i32>()
        .ok()
        .or_else(|| DIGITS.find(raw).and_then(|m| m.as_str().parse::<i32>().ok()))
}

/// Primary source: lofty, which understands every container we copy.
///
/// Files without a decodable bitrate are treated as not audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftySource;

impl MetadataSource for LoftySource {
    fn read(&self, path: &Path) -> Option<RawTags> {
        let tagged = lofty::read_from_path(path).ok()?;
        let properties = tagged.properties();
        properties.audio_bitrate().or(properties.overall_bitrate())?;

        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            return Some(RawTags::default());
        };

        let mut raw = RawTags {
            artist: tag.artist().map(|v| v.to_string()),
            album: tag.album().map(|v| v.to_string()),
            title: tag.title().map(|v| v.to_string()),
            track: None,
            year: None,
        };

        for item in tag.items() {
            let Some(text) = item.value().text() else {
                continue;
            };
            match item.key() {
                ItemKey::TrackNumber if raw.track.is_none() => raw.track = Some(text.to_string()),
                ItemKey::Year | ItemKey::RecordingDate if raw.year.is_none() => {
                    raw.year = Some(text.to_string())
                }
                _ => {}
            }
        }
        if raw.track.is_none() {
            raw.track = tag.track().map(|n| n.to_string());
        }

        Some(raw)
    }
}

/// Secondary source: the ID3 frames read directly, for files where lofty's
/// unified view loses a field.
#[derive(Debug, Default, Clone, Copy)]
pub struct Id3Source;

impl MetadataSource for Id3Source {
    fn read(&self, path: &Path) -> Option<RawTags> {
        use id3::TagLike;

        let tag = id3::Tag::read_from_path(path).ok()?;
        let year = tag
            .date_recorded()
            .map(|ts| ts.year)
            .or_else(|| tag.year());

        Some(RawTags {
            artist: tag.artist().map(str::to_owned),
            album: tag.album().map(str::to_owned),
            title: tag.title().map(str::to_owned),
            track: tag.track().map(|n| n.to_string()),
            year: year.map(|y| y.to_string()),
        })
    }
}

/// Primary + secondary source pair.
pub struct MetadataReader {
    primary: Box<dyn MetadataSource>,
    secondary: Box<dyn MetadataSource>,
}

impl Default for MetadataReader {
    fn default() -> Self {
        Self::new(Box::new(LoftySource), Box::new(Id3Source))
    }
}

impl MetadataReader {
    pub fn new(primary: Box<dyn MetadataSource>, secondary: Box<dyn MetadataSource>) -> Self {
        Self { primary, secondary }
    }

    /// Read `path`, consulting the secondary source only for gaps.
    ///
    /// Returns `None` when the primary source does not recognize an audio
    /// track; fields may still be missing in the returned record.
    pub fn read(&self, path: &Path) -> Option<TagRecord> {
        let record = TagRecord::from_raw(self.primary.read(path)?);
        if record.is_complete() {
            return Some(record);
        }
        Some(match self.secondary.read(path) {
            Some(raw) => record.merge(TagRecord::from_raw(raw)),
            None => record,
        })
    }
}
