//! Command-line flags. Every flag is optional; running with none opens
//! `notes.db` in the working directory with logging disabled.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "notekeep", version, about = "Keep short text notes in a local SQLite file")]
pub struct Cli {
    /// Notes store file; created on first run
    #[arg(long, value_name = "PATH", default_value = notekeep_core::DEFAULT_DB_FILE)]
    pub db: PathBuf,

    /// Write rolling log files into this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL", default_value = notekeep_core::default_log_level())]
    pub log_level: String,
}
