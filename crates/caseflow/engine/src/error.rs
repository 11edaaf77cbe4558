//! Error types for engine operations
//!
//! Only infrastructure problems surface as `Err`: a reference the fetched
//! snapshot cannot resolve, or a repository call that failed. Validation
//! failures travel in the outcome enums instead.

use crate::RepositoryError;
use caseflow_types::CaseError;

/// Errors that can occur while executing an engine operation
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The submission referred to something the snapshot does not contain
    #[error("Case lookup failed: {0}")]
    Case(#[from] CaseError),

    /// The backend repository call failed; includes authorization
    /// failures, which pass through untouched for the outer layer
    #[error("Repository failure: {0}")]
    Repository(#[from] RepositoryError),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
