//! Confirmation flow: the "are you sure?" step around an action
//!
//! Some actions commit on first submission; others pass through an
//! intermediate page asking the user to confirm. The flow has three
//! states: Selecting (action chosen, not yet confirmed), Confirming
//! (yes/no page shown), and a terminal state (committed, or declined
//! with nothing changed). Nothing is persisted until a successful "yes",
//! so abandoning the page abandons the flow.

use crate::{AuthContext, CaseRepository, EngineResult, ExecutionOutcome, OutcomeExecutor};
use caseflow_types::{
    Action, ActionData, CaseId, ConfirmOption, ConfirmSpec, DecisionSubmission, FieldError,
    ValidationErrors,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The resolved content of a confirmation page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfirmPrompt {
    /// Page title, synthesized from the action's target status
    pub title: String,
    /// Content blocks shown between the title and the yes/no choice
    pub details: Vec<serde_json::Value>,
    pub yes: ConfirmOption,
    pub no: ConfirmOption,
}

/// Where the flow goes after a confirmation page submission
#[derive(Clone, Debug, PartialEq)]
pub enum ConfirmOutcome {
    /// No yes/no choice was made; return to Selecting with an error
    BackToSelecting { errors: ValidationErrors },
    /// "Yes", but re-validation failed; return to Confirming with errors
    /// and the in-progress comment preserved by the caller
    BackToConfirming { errors: ValidationErrors },
    /// "Yes" and the action was committed; terminal
    Committed { action_data: ActionData },
    /// "No"; terminal, nothing was called and nothing changed
    Declined,
}

/// Coordinates the optional confirmation step for stage actions
#[derive(Clone, Debug, Default)]
pub struct ConfirmationFlow {
    executor: OutcomeExecutor,
}

impl ConfirmationFlow {
    pub fn new() -> Self {
        Self {
            executor: OutcomeExecutor::new(),
        }
    }

    pub fn executor(&self) -> &OutcomeExecutor {
        &self.executor
    }

    /// Whether submitting this action enters the Confirming state
    pub fn requires_confirmation(&self, action: &Action) -> bool {
        action.requires_confirmation()
    }

    /// Resolve the confirmation page content for an action.
    ///
    /// Defaults: title `Change status to '<target or name>'?`, yes
    /// labelled "Yes", no labelled "No", no details. A custom spec
    /// overrides per field; unset fields keep the default.
    pub fn resolve_prompt(&self, action: &Action) -> ConfirmPrompt {
        let title = format!("Change status to '{}'?", action.status_display());

        match &action.confirm {
            ConfirmSpec::None | ConfirmSpec::Default => ConfirmPrompt {
                title,
                details: Vec::new(),
                yes: ConfirmOption::label("Yes"),
                no: ConfirmOption::label("No"),
            },
            ConfirmSpec::Custom { details, yes, no } => ConfirmPrompt {
                title,
                details: details.clone(),
                yes: yes.clone().unwrap_or_else(|| ConfirmOption::label("Yes")),
                no: no.clone().unwrap_or_else(|| ConfirmOption::label("No")),
            },
        }
    }

    /// Handle a confirmation page submission.
    ///
    /// The user must choose explicitly; there is no default. "Yes"
    /// re-validates against a fresh snapshot and commits through the
    /// executor. "No" is a deliberate no-op: the repository is never
    /// called. Anything else counts as no choice made.
    pub async fn resolve(
        &self,
        repo: &dyn CaseRepository,
        auth: &AuthContext,
        case_id: &CaseId,
        submission: &DecisionSubmission,
    ) -> EngineResult<ConfirmOutcome> {
        let choice = submission
            .confirmation
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        match choice {
            Some("yes") => {
                match self
                    .executor
                    .execute_action(repo, auth, case_id, submission)
                    .await?
                {
                    ExecutionOutcome::Invalid(errors) => {
                        Ok(ConfirmOutcome::BackToConfirming { errors })
                    }
                    ExecutionOutcome::Committed { action_data } => {
                        Ok(ConfirmOutcome::Committed { action_data })
                    }
                }
            }
            Some("no") => {
                debug!(case = %case_id, "confirmation declined");
                Ok(ConfirmOutcome::Declined)
            }
            _ => Ok(ConfirmOutcome::BackToSelecting {
                errors: ValidationErrors::single(
                    "confirmation",
                    FieldError::for_field("Select an option", "confirmation"),
                ),
            }),
        }
    }
}
