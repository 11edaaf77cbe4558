//! Completion tracker: stage save state and task submission mapping
//!
//! Decides whether an entire stage may be saved (every task complete)
//! and turns a raw task form submission into a commit payload, enforcing
//! per-status comment requirements. Pure evaluation; no side effects.

use caseflow_types::{
    normalize_comment, CaseError, CaseResult, CommentRequirement, FieldError, Stage, Task,
    TaskSubmission, TaskUpdate, ValidationErrors,
};
use serde::{Deserialize, Serialize};

/// Derived save state for a stage page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSaveState {
    /// True iff at least one task across all task groups is incomplete
    pub save_disabled: bool,
}

/// Result of mapping a task submission
#[derive(Clone, Debug, PartialEq)]
pub enum TaskMapOutcome {
    /// Submission is valid; commit this update
    Valid(TaskUpdate),
    /// Submission failed validation; re-render with these errors
    Invalid(ValidationErrors),
}

impl TaskMapOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Tracks task completion across a stage
#[derive(Clone, Debug, Default)]
pub struct CompletionTracker;

impl CompletionTracker {
    pub fn new() -> Self {
        Self
    }

    /// Derive whether the stage's save control is disabled.
    ///
    /// A stage with no task groups (and so no tasks) is saveable.
    pub fn stage_save_state(&self, stage: &Stage) -> StageSaveState {
        StageSaveState {
            save_disabled: stage.tasks().any(|t| !t.is_complete()),
        }
    }

    /// Map a raw task submission to a commit payload.
    ///
    /// A submitted status that the task's option set does not contain is
    /// a snapshot mismatch and surfaces as a hard error, not a field
    /// error. Field errors accumulate: a missing status choice and a
    /// missing mandatory comment can both be reported in one pass.
    pub fn map_submission(
        &self,
        task: &Task,
        submission: &TaskSubmission,
    ) -> CaseResult<TaskMapOutcome> {
        let status = submission
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let chosen = match status {
            Some(name) => Some(
                task.find_status_option(name)
                    .ok_or_else(|| CaseError::TaskStatusNotFound(name.to_string()))?,
            ),
            None => None,
        };

        let mut errors = ValidationErrors::new();

        if task.has_status_options() && chosen.is_none() {
            errors.insert("status", FieldError::for_field("Choose an option", "status"));
        }

        // The chosen status's own requirement wins over the task-level one.
        let requirement = match chosen {
            Some(option) if option.comment.has_field() => &option.comment,
            _ => &task.comment_input,
        };

        let field = task.comment_field_name(status);
        let comment = normalize_comment(submission.comment_for(&field));

        if requirement.is_mandatory() && comment.is_none() {
            let label = requirement.label().unwrap_or("Note");
            errors.insert(
                field.clone(),
                FieldError::for_field(format!("{label} is required"), &field),
            );
        }

        if !errors.is_empty() {
            return Ok(TaskMapOutcome::Invalid(errors));
        }

        Ok(TaskMapOutcome::Valid(TaskUpdate {
            completed: true,
            status: status.map(String::from),
            comment,
        }))
    }
}

/// Effective comment requirement for a chosen status, exposed for form
/// rendering (label and help text next to the right field).
pub fn effective_requirement<'a>(
    task: &'a Task,
    status: Option<&str>,
) -> &'a CommentRequirement {
    match status.and_then(|name| task.find_status_option(name)) {
        Some(option) if option.comment.has_field() => &option.comment,
        _ => &task.comment_input,
    }
}
