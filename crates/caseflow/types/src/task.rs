//! Tasks: units of work within a stage
//!
//! A task must be marked complete before its stage can be saved. Some
//! tasks are a plain checkbox; some carry a set of named status options,
//! each of which may demand its own comment.

use crate::{CommentRequirement, NoteRef, TaskCode};
use serde::{Deserialize, Serialize};

/// A named state a task may be set to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusOption {
    /// Status code submitted by the form, e.g. "ATTENDED"
    pub name: String,
    /// Comment demanded when this status is chosen
    pub comment: CommentRequirement,
}

impl StatusOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: CommentRequirement::None,
        }
    }

    pub fn with_comment(mut self, comment: CommentRequirement) -> Self {
        self.comment = comment;
        self
    }

    /// Form field name carrying this option's comment value
    pub fn comment_field_name(&self) -> String {
        format!("{}-comment", self.name)
    }
}

/// A unit of work within a task group
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task code, unique within the stage
    pub code: TaskCode,
    /// Display title
    pub title: String,
    /// Whether the task has been marked complete
    pub completed: bool,
    /// Weak reference to the note recorded when the task was completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_ref: Option<NoteRef>,
    /// Task-level comment field definition
    pub comment_input: CommentRequirement,
    /// Named states this task may be set to; empty for plain checkbox tasks
    pub status_options: Vec<StatusOption>,
}

impl Task {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: TaskCode::new(code),
            title: title.into(),
            completed: false,
            comment_ref: None,
            comment_input: CommentRequirement::None,
            status_options: Vec::new(),
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_comment_input(mut self, comment: CommentRequirement) -> Self {
        self.comment_input = comment;
        self
    }

    pub fn with_status_option(mut self, option: StatusOption) -> Self {
        self.status_options.push(option);
        self
    }

    pub fn with_comment_ref(mut self, reference: NoteRef) -> Self {
        self.comment_ref = Some(reference);
        self
    }

    /// Derived completion predicate
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Whether the form must offer a status choice for this task
    pub fn has_status_options(&self) -> bool {
        !self.status_options.is_empty()
    }

    /// Look up a status option by its submitted name
    pub fn find_status_option(&self, name: &str) -> Option<&StatusOption> {
        self.status_options.iter().find(|o| o.name == name)
    }

    /// Form field name carrying the comment for the given chosen status.
    ///
    /// Tasks with status options carry one comment field per option,
    /// named `{status}-comment`; plain tasks carry a single field named
    /// `comment`.
    pub fn comment_field_name(&self, status: Option<&str>) -> String {
        match status {
            Some(status) => format!("{status}-comment"),
            None => "comment".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_task_is_incomplete_by_default() {
        let task = Task::new("contact-client", "Contact the client");
        assert!(!task.is_complete());
        assert!(!task.has_status_options());
        assert_eq!(task.comment_field_name(None), "comment");
    }

    #[test]
    fn test_status_option_lookup() {
        let task = Task::new("appointment", "Record the appointment")
            .with_status_option(StatusOption::new("ATTENDED"))
            .with_status_option(
                StatusOption::new("MISSED")
                    .with_comment(CommentRequirement::mandatory("Reason for absence")),
            );

        assert!(task.has_status_options());
        assert!(task.find_status_option("ATTENDED").is_some());
        assert!(task.find_status_option("CANCELLED").is_none());

        let missed = task.find_status_option("MISSED").unwrap();
        assert!(missed.comment.is_mandatory());
        assert_eq!(missed.comment_field_name(), "MISSED-comment");
        assert_eq!(task.comment_field_name(Some("MISSED")), "MISSED-comment");
    }

    #[test]
    fn test_completed_task() {
        let task = Task::new("review-docs", "Review documents")
            .with_completed(true)
            .with_comment_ref(NoteRef::new("note-7"));
        assert!(task.is_complete());
        assert_eq!(task.comment_ref, Some(NoteRef::new("note-7")));
    }
}
