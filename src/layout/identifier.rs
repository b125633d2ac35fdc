use crate::library::Track;

/// Number of decimal digits in `n`, at least 1.
pub fn digit_count(n: u64) -> usize {
    let mut n = n / 10;
    let mut digits = 1;
    while n > 0 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Zero-padded file name prefix scheme for one artist.
///
/// Sorting the produced names sorts tracks by recency (newest year first),
/// then album, then track number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierFormat {
    pub newest_year: i32,
    pub year_width: usize,
    pub track_width: usize,
}

impl IdentifierFormat {
    pub fn for_tracks(tracks: &[Track]) -> Self {
        let newest_year = tracks.iter().map(|t| t.year).max().unwrap_or(0);
        let oldest_year = tracks.iter().map(|t| t.year).min().unwrap_or(newest_year);
        let highest_track = tracks.iter().map(|t| t.track_number).max().unwrap_or(1).max(1);

        let span = i64::from(newest_year) - i64::from(oldest_year) + 1;
        Self {
            newest_year,
            year_width: digit_count(span.unsigned_abs()),
            track_width: digit_count(u64::from(highest_track)),
        }
    }

    /// `{year rank}_{album}_{track}`, e.g. `02_Greatest_007`.
    pub fn identifier(&self, track: &Track) -> String {
        let rank = i64::from(self.newest_year) - i64::from(track.year) + 1;
        format!(
            "{rank:0yw$}_{album}_{number:0tw$}",
            album = track.album,
            number = track.track_number,
            yw = self.year_width,
            tw = self.track_width,
        )
    }

    /// Destination file name: the identifier, then the source file name.
    pub fn file_name(&self, track: &Track) -> String {
        let base = track
            .source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}_{}", self.identifier(track), base)
    }
}
