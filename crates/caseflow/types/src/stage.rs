//! Stages and task groups
//!
//! A stage is a named phase of the case lifecycle: ordered task groups
//! plus the set of actions available while the stage is current. At most
//! one stage is current per case; transitions happen only through a
//! successful action execution recorded by the backend.

use crate::{
    Action, ActionCode, DecisionSubmission, StageCode, Task, TaskCode, TaskGroupCode,
};
use serde::{Deserialize, Serialize};

/// An ordered group of tasks within a stage
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskGroup {
    pub code: TaskGroupCode,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl TaskGroup {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: TaskGroupCode::new(code),
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn find_task(&self, code: &TaskCode) -> Option<&Task> {
        self.tasks.iter().find(|t| t.code == *code)
    }
}

/// The action previously recorded for a stage, if any.
///
/// A weak back-reference used only to pre-fill the decision form when a
/// stage is revisited; it confers no behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOutcome {
    pub action_code: ActionCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A named phase of a case's lifecycle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub code: StageCode,
    pub name: String,
    /// Ordered task groups shown on the stage page
    pub task_groups: Vec<TaskGroup>,
    /// Actions available while this stage is current
    pub actions: Vec<Action>,
    /// Previously recorded outcome, used only for form pre-fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<StageOutcome>,
}

impl Stage {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: StageCode::new(code),
            name: name.into(),
            task_groups: Vec::new(),
            actions: Vec::new(),
            outcome: None,
        }
    }

    pub fn with_task_group(mut self, group: TaskGroup) -> Self {
        self.task_groups.push(group);
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_outcome(mut self, outcome: StageOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    // ── Query methods ────────────────────────────────────────────────

    /// Look up an action in this stage's action set
    pub fn find_action(&self, code: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.code.0 == code)
    }

    pub fn find_task_group(&self, code: &TaskGroupCode) -> Option<&TaskGroup> {
        self.task_groups.iter().find(|g| g.code == *code)
    }

    /// All tasks across all task groups, in display order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.task_groups.iter().flat_map(|g| g.tasks.iter())
    }

    /// Pre-fill the decision form from the recorded outcome, if any
    pub fn decision_prefill(&self) -> DecisionSubmission {
        match &self.outcome {
            Some(outcome) => DecisionSubmission {
                action_code: Some(outcome.action_code.0.clone()),
                comment: outcome.comment.clone(),
                confirmation: None,
            },
            None => DecisionSubmission::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stage() -> Stage {
        Stage::new("ASSESSMENT", "Assessment")
            .with_task_group(
                TaskGroup::new("intake", "Intake")
                    .with_task(Task::new("contact", "Contact the client"))
                    .with_task(Task::new("verify-id", "Verify identity")),
            )
            .with_task_group(
                TaskGroup::new("checks", "Checks")
                    .with_task(Task::new("background", "Run background check")),
            )
            .with_action(Action::new("APPROVE", "Approve"))
    }

    #[test]
    fn test_action_lookup() {
        let stage = sample_stage();
        assert!(stage.find_action("APPROVE").is_some());
        assert!(stage.find_action("REJECT").is_none());
    }

    #[test]
    fn test_tasks_iterates_all_groups_in_order() {
        let stage = sample_stage();
        let codes: Vec<_> = stage.tasks().map(|t| t.code.0.as_str()).collect();
        assert_eq!(codes, vec!["contact", "verify-id", "background"]);
    }

    #[test]
    fn test_prefill_without_outcome_is_empty() {
        let stage = sample_stage();
        assert_eq!(stage.decision_prefill(), DecisionSubmission::new());
    }

    #[test]
    fn test_prefill_from_outcome() {
        let stage = sample_stage().with_outcome(StageOutcome {
            action_code: ActionCode::new("APPROVE"),
            comment: Some("All checks passed".to_string()),
        });

        let prefill = stage.decision_prefill();
        assert_eq!(prefill.action_code.as_deref(), Some("APPROVE"));
        assert_eq!(prefill.comment.as_deref(), Some("All checks passed"));
        assert_eq!(prefill.confirmation, None);
    }
}
