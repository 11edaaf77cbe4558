//! Casework Domain Types
//!
//! This crate defines the domain model for a case record as seen by the
//! stage and task workflow engine. A case is a read snapshot fetched fresh
//! per request from the backing case-management API; nothing in this crate
//! holds state across requests.
//!
//! # Key Concepts
//!
//! - **Case**: the top-level snapshot. Carries an ordered sequence of
//!   stages, a pointer to the current one, an append-only collection of
//!   notes, and an optional assigned user.
//! - **Stage**: a named phase of the case lifecycle. Owns ordered task
//!   groups and the set of transition actions available while current.
//! - **Task**: a unit of work inside a stage. Must be marked complete
//!   (optionally with a note) before the stage can be saved.
//! - **Action**: a stage-transition operation. May demand a comment
//!   ([`CommentRequirement`]) and/or an explicit confirmation step
//!   ([`ConfirmSpec`]).
//! - **Form values**: raw submissions ([`DecisionSubmission`],
//!   [`TaskSubmission`]), validated payloads ([`ActionData`],
//!   [`TaskUpdate`]), and field-level errors ([`ValidationErrors`]).
//!
//! All types implement `Clone`, `Debug`, `Serialize`, `Deserialize`.
//! Ids use the newtype pattern and implement `Display` and `new()`;
//! generated ids also implement `generate()`.

#![deny(unsafe_code)]

mod action;
mod case;
mod comment;
mod errors;
mod form;
mod ids;
mod note;
mod stage;
mod task;

pub use action::*;
pub use case::*;
pub use comment::*;
pub use errors::*;
pub use form::*;
pub use ids::*;
pub use note::*;
pub use stage::*;
pub use task::*;
