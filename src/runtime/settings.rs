use crate::config::{self, Settings};
use crate::error::{Error, Result};

use super::cli::Cli;

/// Resolve the run's settings from the command line: one path is a config
/// file, two are source and destination.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match cli.paths.as_slice() {
        [path] => Settings::load(path)?,
        [source, target] => Settings::from_paths(
            config::normalize_root(source),
            config::normalize_root(target),
        ),
        _ => {
            return Err(Error::Config(
                "expected a config file, or a source and a destination".to_string(),
            ));
        }
    };

    if cli.add_index_prefix {
        settings.add_index_prefix = true;
    }
    Ok(settings)
}
