//! Repository layer for note persistence.
//!
//! # Responsibility
//! - Define the storage contract used by the service layer.
//! - Isolate SQLite query details from the shell.
//!
//! # Invariants
//! - "Not found" is an empty result, never an error.
//! - The only error class is store failure (`RepoError::Db`).

pub mod note_repo;
