//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list/detail/delete/search APIs over the `notes` table.
//! - Own the single store connection for the process lifetime.
//!
//! # Invariants
//! - Writes are autocommitted; nothing is buffered across operations.
//! - Lookups and deletes of unknown ids are not errors.
//! - List and search results are ordered by ascending id.
//! - Search keywords match literally; `%`, `_` and `\` are escaped.

use crate::db::DbError;
use crate::model::note::{NoteDetails, NoteId, NoteSummary};
use log::{debug, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error. The store being unavailable or failing is the only case.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "notes store error: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note persistence.
pub trait NoteRepository {
    /// Inserts one note and returns the store-assigned id.
    fn add(&self, title: &str, content: &str) -> RepoResult<NoteId>;
    /// Lists every note as `(id, title)`, ascending by id.
    fn list_all(&self) -> RepoResult<Vec<NoteSummary>>;
    /// Gets title and content for one note; `None` when absent.
    fn get_details(&self, id: NoteId) -> RepoResult<Option<NoteDetails>>;
    /// Deletes one note. Succeeds when no row matches.
    fn delete(&self, id: NoteId) -> RepoResult<()>;
    /// Lists notes whose title or content contains `keyword`.
    fn search(&self, keyword: &str) -> RepoResult<Vec<NoteSummary>>;
    /// Releases the underlying store. Consumes the repository.
    fn close(self) -> RepoResult<()>
    where
        Self: Sized;
}

/// SQLite-backed notes repository owning its connection.
pub struct SqliteNoteRepository {
    conn: Connection,
}

impl SqliteNoteRepository {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens the store at `path`, creating file and schema when absent.
    pub fn open(path: impl AsRef<std::path::Path>) -> RepoResult<Self> {
        Ok(Self::new(crate::db::open_db(path)?))
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self::new(crate::db::open_db_in_memory()?))
    }

    /// Borrows the raw connection, e.g. for schema inspection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl NoteRepository for SqliteNoteRepository {
    fn add(&self, title: &str, content: &str) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (title, content) VALUES (?1, ?2);",
            params![title, content],
        )?;
        let id = NoteId::new(self.conn.last_insert_rowid());
        info!("event=note_add module=repo status=ok note_id={id}");
        Ok(id)
    }

    fn list_all(&self) -> RepoResult<Vec<NoteSummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title FROM notes ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_summary_row(row)?);
        }
        debug!("event=note_list module=repo status=ok count={}", notes.len());
        Ok(notes)
    }

    fn get_details(&self, id: NoteId) -> RepoResult<Option<NoteDetails>> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, content FROM notes WHERE id = ?1;")?;
        let mut rows = stmt.query([id.get()])?;
        if let Some(row) = rows.next()? {
            let title: Option<String> = row.get("title")?;
            let content: Option<String> = row.get("content")?;
            return Ok(Some(NoteDetails {
                title: title.unwrap_or_default(),
                content: content.unwrap_or_default(),
            }));
        }

        debug!("event=note_get module=repo status=not_found note_id={id}");
        Ok(None)
    }

    fn delete(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id.get()])?;
        info!("event=note_delete module=repo status=ok note_id={id} changed={changed}");
        Ok(())
    }

    fn search(&self, keyword: &str) -> RepoResult<Vec<NoteSummary>> {
        let pattern = format!("%{}%", escape_like_pattern(keyword));
        let mut stmt = self.conn.prepare(
            "SELECT id, title
             FROM notes
             WHERE title LIKE ?1 ESCAPE '\\'
                OR content LIKE ?1 ESCAPE '\\'
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([pattern.as_str()])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_summary_row(row)?);
        }
        // Keyword text is user content; only its length is logged.
        info!(
            "event=note_search module=repo status=ok keyword_chars={} count={}",
            keyword.chars().count(),
            notes.len()
        );
        Ok(notes)
    }

    fn close(self) -> RepoResult<()> {
        self.conn
            .close()
            .map_err(|(_conn, err)| RepoError::from(err))?;
        info!("event=db_close module=repo status=ok");
        Ok(())
    }
}

/// Escapes SQL `LIKE` wildcards so the keyword matches literally.
///
/// The backslash is the escape character and is escaped first.
pub fn escape_like_pattern(keyword: &str) -> String {
    keyword
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

fn parse_summary_row(row: &Row<'_>) -> RepoResult<NoteSummary> {
    let title: Option<String> = row.get("title")?;
    Ok(NoteSummary {
        id: NoteId::new(row.get("id")?),
        title: title.unwrap_or_default(),
    })
}
