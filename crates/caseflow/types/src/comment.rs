//! Comment requirements and comment normalization
//!
//! Tasks, task status options, and actions can each demand a free-text
//! comment from the user. The requirement is a tagged variant rather than
//! a bag of optional fields, so callers match on it instead of probing
//! for presence.

use serde::{Deserialize, Serialize};

/// What a task or action demands in its comment field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CommentRequirement {
    /// No comment field is shown
    #[default]
    None,

    /// A comment field is shown but may be left empty
    Optional {
        /// Field label shown to the user
        label: String,
        /// Help text shown under the label
        help_text: Option<String>,
    },

    /// A comment field is shown and must be filled in
    Mandatory {
        /// Field label shown to the user
        label: String,
        /// Help text shown under the label
        help_text: Option<String>,
    },
}

impl CommentRequirement {
    /// An optional comment field with the given label
    pub fn optional(label: impl Into<String>) -> Self {
        Self::Optional {
            label: label.into(),
            help_text: None,
        }
    }

    /// A mandatory comment field with the given label
    pub fn mandatory(label: impl Into<String>) -> Self {
        Self::Mandatory {
            label: label.into(),
            help_text: None,
        }
    }

    pub fn with_help_text(self, text: impl Into<String>) -> Self {
        match self {
            Self::None => Self::None,
            Self::Optional { label, .. } => Self::Optional {
                label,
                help_text: Some(text.into()),
            },
            Self::Mandatory { label, .. } => Self::Mandatory {
                label,
                help_text: Some(text.into()),
            },
        }
    }

    /// Whether an empty submission must be rejected
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Self::Mandatory { .. })
    }

    /// Whether a comment field is shown at all
    pub fn has_field(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The field label, if a field is shown
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Optional { label, .. } | Self::Mandatory { label, .. } => Some(label),
        }
    }

    pub fn help_text(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Optional { help_text, .. } | Self::Mandatory { help_text, .. } => {
                help_text.as_deref()
            }
        }
    }
}

/// Normalize a submitted comment value.
///
/// Absent, empty, and whitespace-only submissions are all treated the
/// same: they normalize to `None`. Anything else is trimmed. Every
/// mandatory-comment check and every commit payload goes through this
/// function, so no path distinguishes a missing field from an empty one.
pub fn normalize_comment(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mandatory_requirement() {
        let req = CommentRequirement::mandatory("Rejection reason")
            .with_help_text("Explain why the case cannot proceed");

        assert!(req.is_mandatory());
        assert!(req.has_field());
        assert_eq!(req.label(), Some("Rejection reason"));
        assert_eq!(req.help_text(), Some("Explain why the case cannot proceed"));
    }

    #[test]
    fn test_optional_requirement() {
        let req = CommentRequirement::optional("Notes");
        assert!(!req.is_mandatory());
        assert!(req.has_field());
        assert_eq!(req.label(), Some("Notes"));
        assert_eq!(req.help_text(), None);
    }

    #[test]
    fn test_none_requirement() {
        let req = CommentRequirement::None;
        assert!(!req.is_mandatory());
        assert!(!req.has_field());
        assert_eq!(req.label(), None);
    }

    #[test]
    fn test_normalize_absent_empty_whitespace() {
        assert_eq!(normalize_comment(None), None);
        assert_eq!(normalize_comment(Some("")), None);
        assert_eq!(normalize_comment(Some("   ")), None);
        assert_eq!(normalize_comment(Some("\t\n")), None);
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(
            normalize_comment(Some("  Not eligible  ")),
            Some("Not eligible".to_string())
        );
    }

    proptest! {
        #[test]
        fn normalized_output_is_trimmed_and_non_empty(s in ".*") {
            if let Some(out) = normalize_comment(Some(&s)) {
                prop_assert!(!out.is_empty());
                prop_assert_eq!(out.trim(), out.as_str());
            }
        }

        #[test]
        fn whitespace_only_always_normalizes_to_none(s in "[ \\t\\r\\n]*") {
            prop_assert_eq!(normalize_comment(Some(&s)), None);
        }
    }
}
