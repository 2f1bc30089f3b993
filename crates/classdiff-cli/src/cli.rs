use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "classdiff",
    about = "Class-aware structural diff for nested theme configuration trees",
    version,
)]
pub struct Cli {
    /// Baseline configuration (JSON)
    pub original: PathBuf,

    /// Updated configuration (JSON)
    pub updated: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
