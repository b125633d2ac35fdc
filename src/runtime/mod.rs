use clap::Parser;
use log::{debug, info, warn};

use crate::config::{Filter, Settings};
use crate::error::Result;
use crate::layout::{LayoutWriter, TitleWriters};
use crate::library::{Indexer, MetadataReader};
use crate::logger;
use crate::reconcile::{self, CleanReport};

mod cli;
mod settings;

pub use cli::Cli;

/// Totals for one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub artists: usize,
    pub tracks: usize,
    pub copied: usize,
    pub retitled: usize,
    pub cleaned: CleanReport,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = logger::init(logger::level_for(cli.verbose, cli.quiet)) {
        eprintln!("tesla-music: failed to install logger: {e}");
    }

    let settings = settings::load_settings(&cli)?;
    settings.check_paths()?;
    let filter = Filter::from_settings(&settings)?;

    sync(&settings, &filter, &MetadataReader::default())?;
    Ok(())
}

/// Index, write, then clean. Each phase finishes before the next starts;
/// cleaning relies on the complete written set.
pub fn sync(settings: &Settings, filter: &Filter, reader: &MetadataReader) -> Result<SyncReport> {
    info!("Indexing files.");
    let catalog = Indexer::new(filter, reader)
        .follow_links(settings.follow_links)
        .index(&settings.source_directories);
    if catalog.is_empty() {
        warn!("No audio files found in the source directories.");
    }

    info!("Writing files.");
    let mut writer = LayoutWriter::new(settings.target_directory.clone());
    if settings.add_index_prefix {
        writer = writer.with_index_prefix(TitleWriters::default());
    }
    let written = writer.write(&catalog)?;

    info!("Cleaning directories.");
    let cleaned = reconcile::clean(&settings.target_directory, &written.written)?;

    let report = SyncReport {
        artists: catalog.len(),
        tracks: catalog.track_count(),
        copied: written.copied,
        retitled: written.retitled,
        cleaned,
    };
    debug!("{report:?}");
    Ok(report)
}
