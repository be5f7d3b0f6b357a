use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "turdle", about = "A word-guessing game about poop")]
pub struct Args {
    /// Word length (3-6); overrides the saved setting
    #[arg(long, short = 'l')]
    pub length: Option<usize>,

    /// Comma-separated words to play, in order
    #[arg(long, value_delimiter = ',')]
    pub words: Option<Vec<String>>,

    /// Directory for saved stats, settings and logs
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory for this run
    #[arg(long)]
    pub ephemeral: bool,

    /// Delete saved stats and settings before starting
    #[arg(long)]
    pub reset: bool,
}
