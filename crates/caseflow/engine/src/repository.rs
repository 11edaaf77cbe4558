//! Case repository: the backend collaborator contract
//!
//! The engine never talks to the case-management API directly; it goes
//! through [`CaseRepository`]. Fetches return fully resolved snapshots
//! (stages, tasks, and actions all present) so validation needs no
//! further round trips. Retry and timeout policy belong to the transport
//! client behind the implementation, not to the engine.

use async_trait::async_trait;
use caseflow_types::{ActionData, Case, CaseId, TaskCode, TaskGroupCode, TaskUpdate, UserId};
use std::collections::HashMap;
use std::sync::RwLock;

/// Opaque pass-through credentials for the backend client
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub username: UserId,
    pub token: String,
}

impl AuthContext {
    pub fn new(username: UserId, token: impl Into<String>) -> Self {
        Self {
            username,
            token: token.into(),
        }
    }
}

/// Errors raised by repository implementations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Case not found: {0}")]
    CaseNotFound(CaseId),

    /// Passed through untouched so the outer layer can apply its own
    /// access-denied response
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Commit rejected by backend: {0}")]
    Rejected(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Access to case records held by the backend case-management API
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Fetch a case by id. The returned snapshot must be fully resolved:
    /// no further fetch is needed to validate against it.
    async fn fetch_case(&self, auth: &AuthContext, case_id: &CaseId)
        -> Result<Case, RepositoryError>;

    /// Commit a validated stage action. Idempotency is NOT guaranteed by
    /// this contract; callers must not double-submit without user intent.
    async fn commit_stage_action(
        &self,
        auth: &AuthContext,
        case_id: &CaseId,
        action: &ActionData,
    ) -> Result<(), RepositoryError>;

    /// Commit a validated task update.
    async fn commit_task_update(
        &self,
        auth: &AuthContext,
        case_id: &CaseId,
        group_code: &TaskGroupCode,
        task_code: &TaskCode,
        update: &TaskUpdate,
    ) -> Result<(), RepositoryError>;
}

/// In-memory [`CaseRepository`] for tests and local harnesses.
///
/// Stores case snapshots and records every committed action and task
/// update so assertions can inspect exactly what would have reached the
/// backend. Task updates are applied to the stored snapshot; stage
/// actions are recorded only, since stage transitions are the real
/// backend's decision.
#[derive(Default)]
pub struct InMemoryCaseRepository {
    cases: RwLock<HashMap<CaseId, Case>>,
    committed_actions: RwLock<Vec<(CaseId, ActionData)>>,
    committed_updates: RwLock<Vec<(CaseId, TaskGroupCode, TaskCode, TaskUpdate)>>,
}

impl InMemoryCaseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with a case snapshot
    pub fn insert_case(&self, case: Case) -> Result<(), RepositoryError> {
        let mut cases = self
            .cases
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        cases.insert(case.id.clone(), case);
        Ok(())
    }

    /// Every stage action committed so far, oldest first
    pub fn committed_actions(&self) -> Vec<(CaseId, ActionData)> {
        self.committed_actions
            .read()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// Every task update committed so far, oldest first
    pub fn committed_updates(&self) -> Vec<(CaseId, TaskGroupCode, TaskCode, TaskUpdate)> {
        self.committed_updates
            .read()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CaseRepository for InMemoryCaseRepository {
    async fn fetch_case(
        &self,
        _auth: &AuthContext,
        case_id: &CaseId,
    ) -> Result<Case, RepositoryError> {
        let cases = self
            .cases
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        cases
            .get(case_id)
            .cloned()
            .ok_or_else(|| RepositoryError::CaseNotFound(case_id.clone()))
    }

    async fn commit_stage_action(
        &self,
        _auth: &AuthContext,
        case_id: &CaseId,
        action: &ActionData,
    ) -> Result<(), RepositoryError> {
        {
            let cases = self
                .cases
                .read()
                .map_err(|_| RepositoryError::LockPoisoned)?;
            if !cases.contains_key(case_id) {
                return Err(RepositoryError::CaseNotFound(case_id.clone()));
            }
        }
        let mut log = self
            .committed_actions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        log.push((case_id.clone(), action.clone()));
        Ok(())
    }

    async fn commit_task_update(
        &self,
        _auth: &AuthContext,
        case_id: &CaseId,
        group_code: &TaskGroupCode,
        task_code: &TaskCode,
        update: &TaskUpdate,
    ) -> Result<(), RepositoryError> {
        let mut cases = self
            .cases
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let case = cases
            .get_mut(case_id)
            .ok_or_else(|| RepositoryError::CaseNotFound(case_id.clone()))?;

        let current = case.current_stage.clone();
        let stage = current
            .as_ref()
            .and_then(|code| case.stages.iter_mut().find(|s| s.code == *code))
            .ok_or_else(|| RepositoryError::Rejected("case has no current stage".to_string()))?;
        let group = stage
            .task_groups
            .iter_mut()
            .find(|g| g.code == *group_code)
            .ok_or_else(|| RepositoryError::Rejected(format!("unknown task group: {group_code}")))?;
        let task = group
            .tasks
            .iter_mut()
            .find(|t| t.code == *task_code)
            .ok_or_else(|| RepositoryError::Rejected(format!("unknown task: {task_code}")))?;

        task.completed = update.completed;

        let mut log = self
            .committed_updates
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        log.push((
            case_id.clone(),
            group_code.clone(),
            task_code.clone(),
            update.clone(),
        ));
        Ok(())
    }
}
