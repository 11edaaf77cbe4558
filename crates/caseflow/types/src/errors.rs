//! Error types for snapshot lookups
//!
//! These are hard failures: the submitted form referred to something the
//! freshly fetched snapshot does not contain. They are never coerced into
//! field-level validation errors.

use crate::{CaseId, NoteRef, StageCode, TaskCode, TaskGroupCode};

/// Errors raised when resolving references against a case snapshot
#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    #[error("Case has no current stage: {0}")]
    NoCurrentStage(CaseId),

    #[error("Stage not found: {0}")]
    StageNotFound(StageCode),

    #[error("Task group not found: {0}")]
    TaskGroupNotFound(TaskGroupCode),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskCode),

    #[error("Task status not found: {0}")]
    TaskStatusNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(NoteRef),
}

/// Result type alias for snapshot lookups
pub type CaseResult<T> = Result<T, CaseError>;
