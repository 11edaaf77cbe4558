//! Caseflow Engine
//!
//! Decision logic for the case stage and task workflow: when a stage may
//! be saved, which stage-level action a submission may take, what comment
//! is mandatory for which action, and how the optional "are you sure?"
//! step gates execution. The engine operates on in-memory case snapshots
//! and returns plain data; the backing case-management API records the
//! actual state transitions.
//!
//! # Key Concepts
//!
//! - **[`CompletionTracker`]**: derives whether a stage may be saved and
//!   maps task form submissions to commit payloads.
//! - **[`ActionValidator`]**: checks a chosen action against the current
//!   stage's action set and its comment requirement.
//! - **[`ConfirmationFlow`]**: the Selecting / Confirming / terminal
//!   state machine around actions that demand explicit confirmation.
//! - **[`OutcomeExecutor`]**: re-fetches the case, runs the validator,
//!   and commits through the [`CaseRepository`] collaborator.
//! - **[`FlashStore`]**: read-once transient storage carrying validation
//!   errors and form values across a redirect.
//!
//! # Design Principles
//!
//! 1. Validation failures are return values, never errors. Callers
//!    branch on the outcome enums; `Err` always means infrastructure.
//! 2. No stale reads: the executor fetches the case fresh before every
//!    commit decision.
//! 3. The engine holds no state across requests and performs no locking;
//!    consistency of the case record is the backend's concern.
//! 4. Nothing here renders. Errors, form values, and derived flags are
//!    data handed back to the route layer.

#![deny(unsafe_code)]

mod action_validator;
mod confirmation;
mod error;
mod flash;
mod outcome;
mod repository;
mod task_tracker;

pub use action_validator::*;
pub use confirmation::*;
pub use error::*;
pub use flash::*;
pub use outcome::*;
pub use repository::*;
pub use task_tracker::*;
