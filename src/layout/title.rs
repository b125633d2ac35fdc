//! Title tag rewriting for the index-prefix pass.
//!
//! Writers are tried in order; each one checks the container itself and
//! answers [`TitleWriteError::FormatMismatch`] when the file isn't its
//! format, so the next writer gets a turn.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lofty::config::WriteOptions;
use lofty::file::FileType;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{Tag, TagType};
use log::warn;

#[derive(Debug)]
pub enum TitleWriteError {
    /// The file is not in this writer's container format.
    FormatMismatch,
    /// The format matched but the tag could not be written.
    Failed(String),
}

pub trait TitleWriter {
    fn name(&self) -> &'static str;
    fn try_write(&self, path: &Path, title: &str) -> Result<(), TitleWriteError>;
}

/// Sniff the container from the file contents, ignoring the extension.
fn detect(path: &Path) -> Option<FileType> {
    let file = File::open(path).ok()?;
    Probe::new(BufReader::new(file))
        .guess_file_type()
        .ok()?
        .file_type()
}

/// ID3v2 titles in MPEG files, written through the `id3` crate.
#[derive(Debug, Default)]
pub struct Id3TitleWriter;

impl TitleWriter for Id3TitleWriter {
    fn name(&self) -> &'static str {
        "id3"
    }

    fn try_write(&self, path: &Path, title: &str) -> Result<(), TitleWriteError> {
        use id3::TagLike;

        if detect(path) != Some(FileType::Mpeg) {
            return Err(TitleWriteError::FormatMismatch);
        }

        // Load existing tag if possible; otherwise start fresh.
        let mut tag = id3::Tag::read_from_path(path).unwrap_or_else(|_| id3::Tag::new());
        tag.set_title(title);
        tag.write_to_path(path, id3::Version::Id3v24)
            .map_err(|e| TitleWriteError::Failed(format!("write_to_path failed: {e}")))
    }
}

/// Titles in one lofty tag type for a set of containers.
#[derive(Debug)]
pub struct LoftyTitleWriter {
    name: &'static str,
    file_types: &'static [FileType],
    tag_type: TagType,
}

impl LoftyTitleWriter {
    pub fn vorbis_comments() -> Self {
        Self {
            name: "vorbis-comments",
            file_types: &[FileType::Flac, FileType::Vorbis, FileType::Opus, FileType::Speex],
            tag_type: TagType::VorbisComments,
        }
    }

    pub fn mp4_ilst() -> Self {
        Self {
            name: "mp4-ilst",
            file_types: &[FileType::Mp4],
            tag_type: TagType::Mp4Ilst,
        }
    }
}

impl TitleWriter for LoftyTitleWriter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn try_write(&self, path: &Path, title: &str) -> Result<(), TitleWriteError> {
        match detect(path) {
            Some(ft) if self.file_types.contains(&ft) => {}
            _ => return Err(TitleWriteError::FormatMismatch),
        }

        let mut tagged = lofty::read_from_path(path)
            .map_err(|e| TitleWriteError::Failed(format!("failed to read: {e}")))?;

        if tagged.tag(self.tag_type).is_none() {
            tagged.insert_tag(Tag::new(self.tag_type));
        }
        let tag = tagged.tag_mut(self.tag_type).ok_or_else(|| {
            TitleWriteError::Failed(format!("file does not support {:?} tags", self.tag_type))
        })?;

        tag.set_title(title.to_string());
        tag.save_to_path(path, WriteOptions::default())
            .map_err(|e| TitleWriteError::Failed(format!("failed to write: {e}")))
    }
}

/// Ordered writer list.
pub struct TitleWriters {
    writers: Vec<Box<dyn TitleWriter>>,
}

impl Default for TitleWriters {
    fn default() -> Self {
        Self::new(vec![
            Box::new(Id3TitleWriter),
            Box::new(LoftyTitleWriter::vorbis_comments()),
            Box::new(LoftyTitleWriter::mp4_ilst()),
        ])
    }
}

impl TitleWriters {
    pub fn new(writers: Vec<Box<dyn TitleWriter>>) -> Self {
        Self { writers }
    }

    /// Set the title of `path` with the first writer that accepts the file.
    ///
    /// Returns `false` when no writer matched or the matching writer failed;
    /// the file keeps its old title either way.
    pub fn write(&self, path: &Path, title: &str) -> bool {
        for writer in &self.writers {
            match writer.try_write(path, title) {
                Ok(()) => return true,
                Err(TitleWriteError::FormatMismatch) => continue,
                Err(TitleWriteError::Failed(msg)) => {
                    warn!("Could not retitle {} ({}): {msg}", path.display(), writer.name());
                    return false;
                }
            }
        }
        false
    }
}

/// `NN Title`, with `NN` zero-padded to `width`.
pub fn prefixed_title(position: usize, width: usize, title: &str) -> String {
    format!("{position:0width$} {title}")
}
