//! Case notes: the append-only comment collection
//!
//! Notes are immutable once created. The engine only ever appends; it
//! never edits or deletes an existing note.

use crate::{NoteRef, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category tag for a free-standing note added against a case
pub const NOTE_ADDED: &str = "NOTE_ADDED";

/// A single note against a case
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Reference id used by tasks and outcomes to point at this note
    pub reference: NoteRef,
    /// Who wrote the note
    pub author: UserId,
    /// Free text
    pub text: String,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// Optional category tag, e.g. [`NOTE_ADDED`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Note {
    /// Create a new note with a generated reference, stamped now
    pub fn new(author: UserId, text: impl Into<String>) -> Self {
        Self {
            reference: NoteRef::generate(),
            author,
            text: text.into(),
            created_at: Utc::now(),
            title: None,
        }
    }

    pub fn with_reference(mut self, reference: NoteRef) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }
}
