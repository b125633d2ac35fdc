use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "tesla-music",
    version,
    about = "Mirror a music library into a folder layout in-car USB players sort correctly",
    override_usage = concat!(
        "tesla-music [OPTIONS] <SOURCE> <DESTINATION>\n",
        "       tesla-music [OPTIONS] <CONFIG>",
    )
)]
pub struct Cli {
    /// A config file (JSON or TOML), or a source directory and a destination.
    #[arg(value_name = "PATHS", required = true, num_args = 1..=2)]
    pub paths: Vec<PathBuf>,

    /// Rewrite copied titles as `NN Title` in file name order.
    #[arg(long)]
    pub add_index_prefix: bool,

    /// More output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less output (-q warnings only, -qq errors only).
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}
