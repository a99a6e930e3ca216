//! Interactive menu loop.
//!
//! # Responsibility
//! - Read menu choices and free-text fields line by line.
//! - Dispatch to [`NoteService`] and print formatted results.
//!
//! # Invariants
//! - The loop ends only on choice `6` or end of input; both close the store.
//! - Id text that is not an integer behaves like an id with no note.
//! - Colors are cosmetic; message text is the contract.

use colored::Colorize;
use log::{debug, info};
use notekeep_core::{NoteId, NoteRepository, NoteService, NoteSummary, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

const SEPARATOR_WIDTH: usize = 20;

const MENU_ITEMS: [(&str, &str); 6] = [
    ("1", "Add a note"),
    ("2", "List all notes"),
    ("3", "Show note details"),
    ("4", "Delete a note"),
    ("5", "Search notes by keyword or phrase"),
    ("6", "Exit"),
];

/// Shell failure. Both cases end the session.
#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    Repo(RepoError),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console I/O failed: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for ShellError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ShellResult<T> = Result<T, ShellError>;

enum Flow {
    Continue,
    Exit,
}

/// Line-oriented note shell over any reader/writer pair.
pub struct Shell<R: NoteRepository, I: BufRead, O: Write> {
    service: NoteService<R>,
    input: I,
    output: O,
}

impl<R: NoteRepository, I: BufRead, O: Write> Shell<R, I, O> {
    pub fn new(service: NoteService<R>, input: I, output: O) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs until the user exits, then closes the store.
    pub fn run(mut self) -> ShellResult<()> {
        info!("event=shell_start module=shell status=ok");
        writeln!(
            self.output,
            "{}",
            format!("notekeep {}", notekeep_core::core_version()).bold()
        )?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                debug!("event=shell_eof module=shell status=ok");
                break;
            };

            let flow = match choice.trim() {
                "1" => self.add_note()?,
                "2" => self.list_notes()?,
                "3" => self.show_note()?,
                "4" => self.delete_note()?,
                "5" => self.search_notes()?,
                "6" => Flow::Exit,
                _ => {
                    writeln!(
                        self.output,
                        "{}",
                        "Invalid choice. Please pick an action from the list.".red()
                    )?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        self.service.close()?;
        self.output.flush()?;
        info!("event=shell_exit module=shell status=ok");
        Ok(())
    }

    fn print_menu(&mut self) -> ShellResult<()> {
        for (key, label) in MENU_ITEMS {
            writeln!(self.output, "{} {label}", format!("{key}.").yellow())?;
        }
        Ok(())
    }

    /// Prints `label` and reads one line without its line terminator.
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn add_note(&mut self) -> ShellResult<Flow> {
        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(content) = self.prompt("Enter content: ")? else {
            return Ok(Flow::Exit);
        };

        self.service.add_note(&title, &content)?;
        writeln!(self.output, "{}", "Note added.".green())?;
        Ok(Flow::Continue)
    }

    fn list_notes(&mut self) -> ShellResult<Flow> {
        let notes = self.service.list_notes()?;
        self.separator()?;
        if notes.is_empty() {
            writeln!(self.output, "{}", "Your note list is empty!".red())?;
        } else {
            writeln!(self.output, "{}", "All notes:".green())?;
            self.print_summaries(&notes)?;
        }
        self.separator()?;
        Ok(Flow::Continue)
    }

    fn show_note(&mut self) -> ShellResult<Flow> {
        let Some(raw_id) = self.prompt("Enter note id: ")? else {
            return Ok(Flow::Exit);
        };

        let details = match NoteId::parse(&raw_id) {
            Some(id) => self.service.note_details(id)?,
            None => None,
        };

        self.separator()?;
        match details {
            Some(note) => {
                writeln!(self.output, "{}", format!("Title: {}", note.title).green())?;
                writeln!(self.output, "{}", format!("Content: {}", note.content).green())?;
            }
            None => writeln!(self.output, "{}", "Note not found.".red())?,
        }
        self.separator()?;
        Ok(Flow::Continue)
    }

    fn delete_note(&mut self) -> ShellResult<Flow> {
        let Some(raw_id) = self.prompt("Enter id of the note to delete: ")? else {
            return Ok(Flow::Exit);
        };

        if let Some(id) = NoteId::parse(&raw_id) {
            self.service.delete_note(id)?;
        }
        writeln!(self.output, "{}", "Note deleted.".red())?;
        Ok(Flow::Continue)
    }

    fn search_notes(&mut self) -> ShellResult<Flow> {
        let Some(keyword) = self.prompt("Enter a keyword or phrase to search for: ")? else {
            return Ok(Flow::Exit);
        };

        let matches = self.service.search_notes(&keyword)?;
        self.separator()?;
        if matches.is_empty() {
            writeln!(self.output, "{}", "No notes found.".red())?;
        } else {
            writeln!(
                self.output,
                "{}",
                format!("Notes containing '{keyword}':").cyan()
            )?;
            self.print_summaries(&matches)?;
        }
        self.separator()?;
        Ok(Flow::Continue)
    }

    fn print_summaries(&mut self, notes: &[NoteSummary]) -> ShellResult<()> {
        for note in notes {
            writeln!(
                self.output,
                "{}",
                format!("{}. {}", note.id, note.title).cyan()
            )?;
        }
        Ok(())
    }

    fn separator(&mut self) -> ShellResult<()> {
        writeln!(self.output, "{}", "➖".repeat(SEPARATOR_WIDTH).red())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Shell;
    use notekeep_core::{NoteId, NoteRepository, NoteService, SqliteNoteRepository};
    use std::io::Cursor;

    fn run_session(repo: SqliteNoteRepository, script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let shell = Shell::new(
            NoteService::new(repo),
            Cursor::new(script.as_bytes().to_vec()),
            &mut output,
        );
        shell.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    fn seeded_repo() -> SqliteNoteRepository {
        let repo = SqliteNoteRepository::open_in_memory().unwrap();
        repo.add("Shopping", "milk, eggs").unwrap();
        repo.add("Todo", "write report").unwrap();
        repo
    }

    #[test]
    fn exit_choice_ends_session() {
        let output = run_session(SqliteNoteRepository::open_in_memory().unwrap(), "6\n");
        assert!(output.contains("1. Add a note"));
        assert!(output.contains("6. Exit"));
        assert!(!output.contains("Invalid choice"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let output = run_session(SqliteNoteRepository::open_in_memory().unwrap(), "");
        assert!(output.contains("Choose an action: "));
    }

    #[test]
    fn empty_store_listing_reports_empty_without_header() {
        let output = run_session(SqliteNoteRepository::open_in_memory().unwrap(), "2\n6\n");
        assert!(output.contains("Your note list is empty!"));
        assert!(!output.contains("All notes:"));
    }

    #[test]
    fn add_then_list_prints_id_and_title() {
        let output = run_session(
            SqliteNoteRepository::open_in_memory().unwrap(),
            "1\nShopping\nmilk, eggs\n2\n6\n",
        );
        assert!(output.contains("Note added."));
        assert!(output.contains("All notes:"));
        assert!(output.contains("1. Shopping"));
    }

    #[test]
    fn show_prints_title_and_content() {
        let output = run_session(seeded_repo(), "3\n2\n6\n");
        assert!(output.contains("Title: Todo"));
        assert!(output.contains("Content: write report"));
    }

    #[test]
    fn show_unknown_or_malformed_id_reports_not_found() {
        let output = run_session(seeded_repo(), "3\n99\n3\nabc\n6\n");
        assert_eq!(output.matches("Note not found.").count(), 2);
    }

    #[test]
    fn delete_always_confirms() {
        let output = run_session(seeded_repo(), "4\n1\n4\n1\n4\nnot-an-id\n2\n6\n");
        assert_eq!(output.matches("Note deleted.").count(), 3);
        assert!(!output.contains("1. Shopping"));
        assert!(output.contains("2. Todo"));
    }

    #[test]
    fn search_prints_matches_or_not_found() {
        let output = run_session(seeded_repo(), "5\negg\n5\nzebra\n6\n");
        assert!(output.contains("Notes containing 'egg':"));
        assert!(output.contains("1. Shopping"));
        assert!(!output.contains("2. Todo"));
        assert!(output.contains("No notes found."));
    }

    #[test]
    fn invalid_choice_redisplays_menu() {
        let output = run_session(SqliteNoteRepository::open_in_memory().unwrap(), "9\n\n6\n");
        assert_eq!(
            output.matches("Invalid choice. Please pick an action from the list.").count(),
            2
        );
        assert_eq!(output.matches("6. Exit").count(), 3);
    }

    #[test]
    fn padded_choice_and_crlf_input_are_accepted() {
        let repo = SqliteNoteRepository::open_in_memory().unwrap();
        let output = run_session(repo, " 1 \r\nTitle with spaces \r\nbody\r\n2\r\n6\r\n");
        assert!(output.contains("1. Title with spaces "));
    }

    #[test]
    fn added_note_is_persisted_with_exact_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.db");

        run_session(
            SqliteNoteRepository::open(&path).unwrap(),
            "1\n  padded title\n\n6\n",
        );

        let reopened = SqliteNoteRepository::open(&path).unwrap();
        let details = reopened.get_details(NoteId::new(1)).unwrap().unwrap();
        assert_eq!(details.title, "  padded title");
        assert_eq!(details.content, "");
    }
}
