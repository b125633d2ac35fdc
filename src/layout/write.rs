use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::library::{Artist, Catalog};

use super::identifier::{IdentifierFormat, digit_count};
use super::title::{TitleWriters, prefixed_title};

/// What a layout pass did.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Every destination path the catalog maps to, copied or not.
    pub written: HashSet<PathBuf>,
    pub copied: usize,
    pub retitled: usize,
}

/// Decide whether an existing destination must be replaced.
///
/// Copies when the sizes differ or the source is newer. An unknown
/// modification time on either side counts as stale.
pub fn needs_copy(
    source_modified: Option<SystemTime>,
    source_len: u64,
    dest_modified: Option<SystemTime>,
    dest_len: u64,
) -> bool {
    if source_len != dest_len {
        return true;
    }
    match (source_modified, dest_modified) {
        (Some(src), Some(dst)) => src > dst,
        _ => true,
    }
}

/// Copy `source` to `dest` unless `dest` already looks current.
///
/// Returns whether bytes were copied.
pub fn copy_if_stale(source: &Path, dest: &Path) -> Result<bool> {
    let src = fs::metadata(source).map_err(|e| Error::io(source, e))?;
    if let Ok(dst) = fs::metadata(dest) {
        let stale = needs_copy(
            src.modified().ok(),
            src.len(),
            dst.modified().ok(),
            dst.len(),
        );
        if dst.is_file() && !stale {
            return Ok(false);
        }
    }
    fs::copy(source, dest).map_err(|e| Error::io(dest, e))?;
    Ok(true)
}

/// Lays a [`Catalog`] out under a destination root.
pub struct LayoutWriter {
    destination: PathBuf,
    titles: Option<TitleWriters>,
}

impl LayoutWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            titles: None,
        }
    }

    /// Enable the `NN Title` pass using `writers`.
    pub fn with_index_prefix(mut self, writers: TitleWriters) -> Self {
        self.titles = Some(writers);
        self
    }

    /// Write every artist, in catalog order.
    pub fn write(&self, catalog: &Catalog) -> Result<WriteReport> {
        let mut report = WriteReport::default();
        for artist in catalog.artists() {
            self.write_artist(artist, &mut report)?;
        }
        Ok(report)
    }

    fn write_artist(&self, artist: &Artist, report: &mut WriteReport) -> Result<()> {
        info!("Writing {}", artist.name);

        let dir = self.destination.join(&artist.name);
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

        let format = IdentifierFormat::for_tracks(artist.tracks());
        let mut placed: Vec<(PathBuf, &str)> = Vec::with_capacity(artist.tracks().len());

        for track in artist.tracks() {
            let dest = dir.join(format.file_name(track));
            report.written.insert(dest.clone());

            if copy_if_stale(&track.source_path, &dest)? {
                debug!("Copied {} -> {}", track.source_path.display(), dest.display());
                report.copied += 1;
            }
            placed.push((dest, track.title.as_str()));
        }

        if let Some(writers) = &self.titles {
            placed.sort_by(|a, b| a.0.cmp(&b.0));
            let width = digit_count(placed.len() as u64);
            for (i, (dest, title)) in placed.iter().enumerate() {
                if writers.write(dest, &prefixed_title(i + 1, width, title)) {
                    report.retitled += 1;
                }
            }
        }

        Ok(())
    }
}
