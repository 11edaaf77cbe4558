//! Form-side value types: raw submissions, validated payloads, and
//! field-level errors
//!
//! Raw submissions carry whatever the browser posted (optional strings,
//! untrimmed). Validated payloads ([`ActionData`], [`TaskUpdate`]) only
//! ever carry normalized values. Errors are plain data for the caller to
//! render; the engine never renders.

use crate::ActionCode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A single field-level validation error
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Message shown against the field and in the error summary
    pub text: String,
    /// Anchor the error summary links to, e.g. `#decision`
    pub href: String,
}

impl FieldError {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }

    /// An error anchored at `#{field}`
    pub fn for_field(text: impl Into<String>, field: &str) -> Self {
        Self {
            text: text.into(),
            href: format!("#{field}"),
        }
    }
}

/// Field-level validation errors keyed by form field name.
///
/// Iteration order is the field names' sort order, so rendered error
/// summaries are stable across requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationErrors(BTreeMap<String, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.0.insert(field.into(), error);
    }

    /// Single-error constructor
    pub fn single(field: impl Into<String>, error: FieldError) -> Self {
        let mut errors = Self::new();
        errors.insert(field, error);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldError)> {
        self.0.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = (String, FieldError);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// The decision form as submitted: action choice, comment, and (when the
/// confirmation page is in play) the yes/no answer. All fields are raw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DecisionSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
}

impl DecisionSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, code: impl Into<String>) -> Self {
        self.action_code = Some(code.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_confirmation(mut self, answer: impl Into<String>) -> Self {
        self.confirmation = Some(answer.into());
        self
    }
}

/// A task form as submitted: the chosen status (if the task has status
/// options) and every posted comment field, keyed by field name. Each
/// status option carries its own independent comment field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TaskSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub comments: HashMap<String, String>,
}

impl TaskSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_comment(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.comments.insert(field.into(), value.into());
        self
    }

    /// Raw value of a named comment field
    pub fn comment_for(&self, field: &str) -> Option<&str> {
        self.comments.get(field).map(String::as_str)
    }
}

/// Validated payload committed when a stage action executes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionData {
    pub action_code: ActionCode,
    /// Present only when a non-empty trimmed comment was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Validated payload committed when a task is saved
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub completed: bool,
    /// Chosen status, for tasks with status options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Normalized comment for the chosen status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
