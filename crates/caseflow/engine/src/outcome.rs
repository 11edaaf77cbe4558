//! Outcome executor: validate against a fresh snapshot, then commit
//!
//! The executor is the only component that touches the repository. It
//! never trusts a stale read: every operation re-fetches the case before
//! deciding anything. Validation failures come back as values for the
//! caller to render; repository failures propagate as errors untouched.

use crate::{
    ActionValidator, AuthContext, CaseRepository, CompletionTracker, EngineResult,
    TaskMapOutcome, ValidationOutcome,
};
use caseflow_types::{
    ActionData, CaseError, CaseId, DecisionSubmission, TaskCode, TaskGroupCode, TaskSubmission,
    TaskUpdate, ValidationErrors,
};
use tracing::{debug, info};

/// Result of executing a stage action
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutionOutcome {
    /// The action was committed to the backend
    Committed { action_data: ActionData },
    /// Validation failed against the fresh snapshot; nothing committed
    Invalid(ValidationErrors),
}

impl ExecutionOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Result of executing a task update
#[derive(Clone, Debug, PartialEq)]
pub enum TaskOutcome {
    /// The update was committed to the backend
    Saved { update: TaskUpdate },
    /// Validation failed; nothing committed
    Invalid(ValidationErrors),
}

/// Orchestrates validation and commit for stage actions and task edits
#[derive(Clone, Debug, Default)]
pub struct OutcomeExecutor {
    validator: ActionValidator,
    tracker: CompletionTracker,
}

impl OutcomeExecutor {
    pub fn new() -> Self {
        Self {
            validator: ActionValidator::new(),
            tracker: CompletionTracker::new(),
        }
    }

    pub fn validator(&self) -> &ActionValidator {
        &self.validator
    }

    pub fn tracker(&self) -> &CompletionTracker {
        &self.tracker
    }

    /// Execute a stage action submission.
    ///
    /// Fetches the case fresh, validates the submission against the
    /// current stage, and commits on success. A missing current stage is
    /// a hard failure; a repository failure during fetch or commit
    /// propagates to the caller unswallowed.
    pub async fn execute_action(
        &self,
        repo: &dyn CaseRepository,
        auth: &AuthContext,
        case_id: &CaseId,
        submission: &DecisionSubmission,
    ) -> EngineResult<ExecutionOutcome> {
        let case = repo.fetch_case(auth, case_id).await?;
        let stage = case
            .current_stage()
            .ok_or_else(|| CaseError::NoCurrentStage(case.id.clone()))?;

        match self.validator.validate(stage, submission) {
            ValidationOutcome::Invalid(errors) => {
                debug!(case = %case_id, errors = errors.len(), "stage action rejected by validation");
                Ok(ExecutionOutcome::Invalid(errors))
            }
            ValidationOutcome::Valid(action_data) => {
                repo.commit_stage_action(auth, case_id, &action_data).await?;
                info!(case = %case_id, action = %action_data.action_code, "stage action committed");
                Ok(ExecutionOutcome::Committed { action_data })
            }
        }
    }

    /// Execute a task edit through the same fetch-validate-commit path.
    ///
    /// The task must exist in the current stage of the fresh snapshot;
    /// a missing stage, group, or task is a hard not-found failure.
    pub async fn execute_task_update(
        &self,
        repo: &dyn CaseRepository,
        auth: &AuthContext,
        case_id: &CaseId,
        group_code: &TaskGroupCode,
        task_code: &TaskCode,
        submission: &TaskSubmission,
    ) -> EngineResult<TaskOutcome> {
        let case = repo.fetch_case(auth, case_id).await?;
        let stage = case
            .current_stage()
            .ok_or_else(|| CaseError::NoCurrentStage(case.id.clone()))?;
        let group = stage
            .find_task_group(group_code)
            .ok_or_else(|| CaseError::TaskGroupNotFound(group_code.clone()))?;
        let task = group
            .find_task(task_code)
            .ok_or_else(|| CaseError::TaskNotFound(task_code.clone()))?;

        match self.tracker.map_submission(task, submission)? {
            TaskMapOutcome::Invalid(errors) => {
                debug!(case = %case_id, task = %task_code, "task update rejected by validation");
                Ok(TaskOutcome::Invalid(errors))
            }
            TaskMapOutcome::Valid(update) => {
                repo.commit_task_update(auth, case_id, group_code, task_code, &update)
                    .await?;
                info!(case = %case_id, task = %task_code, "task update committed");
                Ok(TaskOutcome::Saved { update })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryCaseRepository, RepositoryError};
    use caseflow_types::{
        Action, ActionCode, Case, CommentRequirement, Stage, StageCode, Task, TaskGroup, UserId,
    };

    fn auth() -> AuthContext {
        AuthContext::new(UserId::new("officer-1"), "token-1")
    }

    fn seeded_repo() -> (InMemoryCaseRepository, CaseId) {
        let case_id = CaseId::new("case-1");
        let case = Case::new(case_id.clone(), "CAS-2031")
            .with_stage(
                Stage::new("ASSESSMENT", "Assessment")
                    .with_task_group(
                        TaskGroup::new("intake", "Intake")
                            .with_task(Task::new("contact", "Contact the client")),
                    )
                    .with_action(
                        Action::new("REJECT", "Reject")
                            .with_comment(CommentRequirement::mandatory("Rejection reason")),
                    )
                    .with_action(Action::new("APPROVE", "Approve")),
            )
            .with_current_stage(StageCode::new("ASSESSMENT"));

        let repo = InMemoryCaseRepository::new();
        repo.insert_case(case).unwrap();
        (repo, case_id)
    }

    #[tokio::test]
    async fn validation_failure_commits_nothing() {
        let (repo, case_id) = seeded_repo();
        let executor = OutcomeExecutor::new();
        let submission = DecisionSubmission::new().with_action("REJECT");

        let outcome = executor
            .execute_action(&repo, &auth(), &case_id, &submission)
            .await
            .unwrap();

        assert!(!outcome.is_committed());
        assert!(repo.committed_actions().is_empty());
    }

    #[tokio::test]
    async fn valid_action_is_committed() {
        let (repo, case_id) = seeded_repo();
        let executor = OutcomeExecutor::new();
        let submission = DecisionSubmission::new()
            .with_action("REJECT")
            .with_comment("Not eligible");

        let outcome = executor
            .execute_action(&repo, &auth(), &case_id, &submission)
            .await
            .unwrap();

        let ExecutionOutcome::Committed { action_data } = outcome else {
            panic!("expected commit");
        };
        assert_eq!(action_data.action_code, ActionCode::new("REJECT"));
        assert_eq!(repo.committed_actions().len(), 1);
    }

    #[tokio::test]
    async fn missing_case_propagates_as_error() {
        let repo = InMemoryCaseRepository::new();
        let executor = OutcomeExecutor::new();
        let submission = DecisionSubmission::new().with_action("APPROVE");

        let err = executor
            .execute_action(&repo, &auth(), &CaseId::new("missing"), &submission)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            crate::EngineError::Repository(RepositoryError::CaseNotFound(_))
        ));
    }

    #[tokio::test]
    async fn case_without_current_stage_is_hard_failure() {
        let repo = InMemoryCaseRepository::new();
        let case_id = CaseId::new("case-2");
        repo.insert_case(Case::new(case_id.clone(), "CAS-2032")).unwrap();
        let executor = OutcomeExecutor::new();

        let err = executor
            .execute_action(
                &repo,
                &auth(),
                &case_id,
                &DecisionSubmission::new().with_action("APPROVE"),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            crate::EngineError::Case(CaseError::NoCurrentStage(_))
        ));
    }

    #[tokio::test]
    async fn task_update_is_committed_and_applied() {
        let (repo, case_id) = seeded_repo();
        let executor = OutcomeExecutor::new();

        let outcome = executor
            .execute_task_update(
                &repo,
                &auth(),
                &case_id,
                &TaskGroupCode::new("intake"),
                &TaskCode::new("contact"),
                &TaskSubmission::new(),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, TaskOutcome::Saved { .. }));
        assert_eq!(repo.committed_updates().len(), 1);

        // The fresh snapshot now reports the stage as saveable
        let case = repo.fetch_case(&auth(), &case_id).await.unwrap();
        let stage = case.current_stage().unwrap();
        assert!(!executor.tracker().stage_save_state(stage).save_disabled);
    }

    #[tokio::test]
    async fn unknown_task_group_is_not_found() {
        let (repo, case_id) = seeded_repo();
        let executor = OutcomeExecutor::new();

        let err = executor
            .execute_task_update(
                &repo,
                &auth(),
                &case_id,
                &TaskGroupCode::new("unknown"),
                &TaskCode::new("contact"),
                &TaskSubmission::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            crate::EngineError::Case(CaseError::TaskGroupNotFound(_))
        ));
    }
}
