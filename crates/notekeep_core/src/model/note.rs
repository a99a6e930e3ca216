//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its list/detail projections.
//! - Parse user-entered id text at the shell boundary.
//!
//! # Invariants
//! - `NoteId` values are assigned by the store and never mutated.
//! - Title and content may be empty strings.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned note identifier (`notes.id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Parses user-entered id text.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for anything that is
    /// not a base-10 integer; callers treat that the same as an id with no
    /// matching note.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<i64>().ok().map(Self)
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Full persisted note row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Splits a full note into its list projection.
    pub fn summary(&self) -> NoteSummary {
        NoteSummary {
            id: self.id,
            title: self.title.clone(),
        }
    }

    /// Splits a full note into its detail projection.
    pub fn details(&self) -> NoteDetails {
        NoteDetails {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// List/search projection: id and title only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: NoteId,
    pub title: String,
}

/// Detail projection returned by id lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDetails {
    pub title: String,
    pub content: String,
}
