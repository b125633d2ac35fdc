//! Mirrored-sync cleanup of the destination tree.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::error::{Error, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub files_removed: usize,
    pub dirs_removed: usize,
}

/// Delete every file under `root` that is not in `written`, then every
/// directory left empty. `root` itself is kept.
///
/// Must run after the layout pass has finished: anything missing from
/// `written` is treated as stale.
pub fn clean(root: &Path, written: &HashSet<PathBuf>) -> Result<CleanReport> {
    let mut report = CleanReport::default();

    // Contents first, so a directory is visited after everything in it.
    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            Error::Io {
                path,
                source: io::Error::from(e),
            }
        })?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            if is_empty_dir(path)? {
                fs::remove_dir(path).map_err(|e| Error::io(path, e))?;
                info!("Removed empty directory {}", path.display());
                report.dirs_removed += 1;
            }
        } else if !written.contains(path) {
            fs::remove_file(path).map_err(|e| Error::io(path, e))?;
            debug!("Removed {}", path.display());
            report.files_removed += 1;
        }
    }

    Ok(report)
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
    Ok(entries.next().is_none())
}
