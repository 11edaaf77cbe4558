//! Stage action validator
//!
//! Given a chosen stage-level action and the submitted comment, decides
//! pass/fail and produces field-level errors. Deterministic: identical
//! inputs always produce identical output, and there is no hidden state.

use caseflow_types::{
    normalize_comment, ActionData, DecisionSubmission, FieldError, Stage, ValidationErrors,
};

/// Form field name and summary anchor for the action choice itself
const ACTION_FIELD: &str = "actionCode";
const ACTION_ANCHOR: &str = "#decision";

/// Result of validating a decision submission
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationOutcome {
    /// Submission is valid; this payload may be committed
    Valid(ActionData),
    /// Submission failed; re-render with these errors
    Invalid(ValidationErrors),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The errors, if validation failed
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }
}

/// Validates stage-level action submissions
#[derive(Clone, Debug, Default)]
pub struct ActionValidator;

impl ActionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a decision submission against a stage's action set.
    ///
    /// An action code missing from the submission or absent from the
    /// stage's set is a hard validation failure, never silently ignored.
    /// Optional comments are never forced into the payload as empty
    /// strings: an empty submission simply omits the comment.
    pub fn validate(&self, stage: &Stage, submission: &DecisionSubmission) -> ValidationOutcome {
        let action = submission
            .action_code
            .as_deref()
            .and_then(|code| stage.find_action(code));

        let Some(action) = action else {
            return ValidationOutcome::Invalid(ValidationErrors::single(
                ACTION_FIELD,
                FieldError::new("Invalid action selected", ACTION_ANCHOR),
            ));
        };

        let comment = normalize_comment(submission.comment.as_deref());

        if action.comment.is_mandatory() && comment.is_none() {
            let field = format!("{}-comment", action.code);
            let label = action.comment.label().unwrap_or("Note");
            return ValidationOutcome::Invalid(ValidationErrors::single(
                field.clone(),
                FieldError::for_field(format!("{label} is required"), &field),
            ));
        }

        ValidationOutcome::Valid(ActionData {
            action_code: action.code.clone(),
            comment,
        })
    }
}
