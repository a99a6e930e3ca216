//! Notekeep console entry point.
//!
//! # Responsibility
//! - Parse flags, optionally start file logging, open the notes store.
//! - Hand stdin/stdout to the interactive shell.
//! - Map fatal errors to exit code 1.

mod cli;
mod shell;

use clap::Parser;
use cli::Cli;
use log::error;
use notekeep_core::{init_logging, LoggingError, NoteService, RepoError, SqliteNoteRepository};
use shell::{Shell, ShellError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::process::ExitCode;

/// Fatal startup or session failure.
#[derive(Debug)]
enum AppError {
    LogDir(std::io::Error),
    Logging(LoggingError),
    Store(RepoError),
    Shell(ShellError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LogDir(err) => write!(f, "cannot resolve log directory: {err}"),
            Self::Logging(err) => write!(f, "cannot start logging: {err}"),
            Self::Store(err) => write!(f, "cannot open notes store: {err}"),
            Self::Shell(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::LogDir(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Shell(err) => Some(err),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("notekeep: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        start_logging(&cli.log_level, log_dir)?;
    }

    let repo = SqliteNoteRepository::open(&cli.db).map_err(AppError::Store)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(NoteService::new(repo), stdin.lock(), stdout.lock())
        .run()
        .map_err(AppError::Shell)
}

fn start_logging(level: &str, log_dir: &Path) -> Result<(), AppError> {
    let log_dir = std::path::absolute(log_dir).map_err(AppError::LogDir)?;
    init_logging(level, &log_dir.to_string_lossy()).map_err(AppError::Logging)
}
