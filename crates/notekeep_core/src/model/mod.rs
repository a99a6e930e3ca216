//! Domain model for persisted notes.
//!
//! # Responsibility
//! - Define the note record and the projections returned by list/detail reads.
//!
//! # Invariants
//! - Every note is identified by a store-assigned `NoteId`.
//! - Deletion is a hard delete; ids are never reused.

pub mod note;
