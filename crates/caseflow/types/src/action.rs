//! Stage-transition actions and their confirmation specifications
//!
//! An action belongs to exactly one stage's action set. Selecting an
//! action not in the current stage's set is a validation failure, never
//! a no-op. Whether an action needs an "are you sure?" step is a tagged
//! variant ([`ConfirmSpec`]) rather than a maybe-present field, so the
//! confirmation flow matches on it instead of probing.

use crate::{ActionCode, CommentRequirement};
use serde::{Deserialize, Serialize};

/// A stage-transition operation, e.g. approve or reject
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Action code submitted by the decision form
    pub code: ActionCode,
    /// Display name
    pub name: String,
    /// The case status this action moves the case to, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_status: Option<String>,
    /// Comment demanded alongside this action
    pub comment: CommentRequirement,
    /// Confirmation step specification
    pub confirm: ConfirmSpec,
}

impl Action {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: ActionCode::new(code),
            name: name.into(),
            target_status: None,
            comment: CommentRequirement::None,
            confirm: ConfirmSpec::None,
        }
    }

    pub fn with_target_status(mut self, status: impl Into<String>) -> Self {
        self.target_status = Some(status.into());
        self
    }

    pub fn with_comment(mut self, comment: CommentRequirement) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_confirm(mut self, confirm: ConfirmSpec) -> Self {
        self.confirm = confirm;
        self
    }

    /// Whether executing this action passes through the confirmation step
    pub fn requires_confirmation(&self) -> bool {
        !matches!(self.confirm, ConfirmSpec::None)
    }

    /// The status name shown in confirmation copy: the target status if
    /// one is recorded, the action's display name otherwise.
    pub fn status_display(&self) -> &str {
        self.target_status.as_deref().unwrap_or(&self.name)
    }
}

/// Whether and how an action asks the user to confirm
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum ConfirmSpec {
    /// No confirmation step; the action commits on first submission
    #[default]
    None,

    /// Confirmation step with wholly synthesized copy
    Default,

    /// Confirmation step with overridden copy. Any field left unset
    /// falls back to the synthesized default.
    Custom {
        /// Content blocks shown between the title and the yes/no choice
        details: Vec<serde_json::Value>,
        /// Override for the "yes" option
        yes: Option<ConfirmOption>,
        /// Override for the "no" option
        no: Option<ConfirmOption>,
    },
}

impl ConfirmSpec {
    /// A custom spec with no overrides yet
    pub fn custom() -> Self {
        Self::Custom {
            details: Vec::new(),
            yes: None,
            no: None,
        }
    }

    pub fn with_detail(self, detail: serde_json::Value) -> Self {
        match self {
            Self::Custom { mut details, yes, no } => {
                details.push(detail);
                Self::Custom { details, yes, no }
            }
            other => other,
        }
    }

    pub fn with_yes(self, option: ConfirmOption) -> Self {
        match self {
            Self::Custom { details, no, .. } => Self::Custom {
                details,
                yes: Some(option),
                no,
            },
            other => other,
        }
    }

    pub fn with_no(self, option: ConfirmOption) -> Self {
        match self {
            Self::Custom { details, yes, .. } => Self::Custom {
                details,
                yes,
                no: Some(option),
            },
            other => other,
        }
    }
}

/// A resolved yes/no option on the confirmation page.
///
/// Carries either a plain label or a nested content block, never both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConfirmOption {
    /// Plain button label
    Label(String),
    /// Arbitrary nested content rendered in place of a plain button
    Components(serde_json::Value),
}

impl ConfirmOption {
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    /// The plain label, if this option is one
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(text) => Some(text),
            Self::Components(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_action_needs_no_confirmation() {
        let action = Action::new("SAVE", "Save progress");
        assert!(!action.requires_confirmation());
        assert_eq!(action.status_display(), "Save progress");
    }

    #[test]
    fn test_default_confirm_requires_step() {
        let action = Action::new("APPROVE", "Approve")
            .with_target_status("Approved")
            .with_confirm(ConfirmSpec::Default);
        assert!(action.requires_confirmation());
        assert_eq!(action.status_display(), "Approved");
    }

    #[test]
    fn test_custom_confirm_builders() {
        let spec = ConfirmSpec::custom()
            .with_detail(json!({"type": "paragraph", "text": "This cannot be undone"}))
            .with_yes(ConfirmOption::label("Yes, reject the case"))
            .with_no(ConfirmOption::label("No, go back"));

        let ConfirmSpec::Custom { details, yes, no } = spec else {
            panic!("expected custom spec");
        };
        assert_eq!(details.len(), 1);
        assert_eq!(yes.unwrap().as_label(), Some("Yes, reject the case"));
        assert_eq!(no.unwrap().as_label(), Some("No, go back"));
    }

    #[test]
    fn test_option_label_or_components() {
        let label = ConfirmOption::label("Yes");
        assert_eq!(label.as_label(), Some("Yes"));

        let block = ConfirmOption::Components(json!({"type": "warning", "text": "Final"}));
        assert_eq!(block.as_label(), None);
    }
}
