//! Note use-case service.
//!
//! # Responsibility
//! - Expose the note operations to the shell.
//! - Keep the shell decoupled from the storage implementation.
//!
//! # Invariants
//! - Every call forwards arguments and results unchanged.
//! - The service holds no state besides its repository.

use crate::model::note::{NoteDetails, NoteId, NoteSummary};
use crate::repo::note_repo::{NoteRepository, RepoResult};

/// Facade over a [`NoteRepository`] implementation.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_note(&self, title: &str, content: &str) -> RepoResult<NoteId> {
        self.repo.add(title, content)
    }

    pub fn list_notes(&self) -> RepoResult<Vec<NoteSummary>> {
        self.repo.list_all()
    }

    pub fn note_details(&self, id: NoteId) -> RepoResult<Option<NoteDetails>> {
        self.repo.get_details(id)
    }

    pub fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        self.repo.delete(id)
    }

    pub fn search_notes(&self, keyword: &str) -> RepoResult<Vec<NoteSummary>> {
        self.repo.search(keyword)
    }

    /// Closes the underlying store.
    pub fn close(self) -> RepoResult<()> {
        self.repo.close()
    }
}
