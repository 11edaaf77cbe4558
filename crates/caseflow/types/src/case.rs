//! The case snapshot
//!
//! A case is fetched fresh per request and never held across requests.
//! Consistency of the underlying record is the backend's responsibility;
//! this type performs no locking and no mutation beyond builders used to
//! assemble snapshots in tests and adapters.

use crate::{CaseId, Note, NoteRef, Stage, StageCode, UserId};
use serde::{Deserialize, Serialize};

/// A read snapshot of a case record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    /// Human-facing case reference, e.g. "CAS-2031"
    pub reference: String,
    /// Code of the stage currently in progress; at most one stage is
    /// current at a time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stage: Option<StageCode>,
    /// Ordered lifecycle stages
    pub stages: Vec<Stage>,
    /// Append-only note collection
    pub notes: Vec<Note>,
    /// The user the case is assigned to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user: Option<UserId>,
}

impl Case {
    pub fn new(id: CaseId, reference: impl Into<String>) -> Self {
        Self {
            id,
            reference: reference.into(),
            current_stage: None,
            stages: Vec::new(),
            notes: Vec::new(),
            assigned_user: None,
        }
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn with_current_stage(mut self, code: StageCode) -> Self {
        self.current_stage = Some(code);
        self
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_assigned_user(mut self, user: UserId) -> Self {
        self.assigned_user = Some(user);
        self
    }

    // ── Query methods ────────────────────────────────────────────────

    /// The stage currently in progress, if the pointer resolves
    pub fn current_stage(&self) -> Option<&Stage> {
        let code = self.current_stage.as_ref()?;
        self.find_stage(code)
    }

    pub fn find_stage(&self, code: &StageCode) -> Option<&Stage> {
        self.stages.iter().find(|s| s.code == *code)
    }

    /// Resolve a note reference against the note collection
    pub fn note(&self, reference: &NoteRef) -> Option<&Note> {
        self.notes.iter().find(|n| n.reference == *reference)
    }

    pub fn is_assigned_to(&self, user: &UserId) -> bool {
        self.assigned_user.as_ref() == Some(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_case() -> Case {
        Case::new(CaseId::new("case-1"), "CAS-2031")
            .with_stage(Stage::new("INTAKE", "Intake"))
            .with_stage(Stage::new("ASSESSMENT", "Assessment"))
            .with_current_stage(StageCode::new("ASSESSMENT"))
    }

    #[test]
    fn test_current_stage_resolves() {
        let case = sample_case();
        assert_eq!(case.current_stage().unwrap().name, "Assessment");
    }

    #[test]
    fn test_current_stage_none_when_pointer_unset() {
        let case = Case::new(CaseId::new("case-2"), "CAS-2032");
        assert!(case.current_stage().is_none());
    }

    #[test]
    fn test_current_stage_none_when_pointer_dangles() {
        let case = sample_case().with_current_stage(StageCode::new("MISSING"));
        assert!(case.current_stage().is_none());
    }

    #[test]
    fn test_note_lookup() {
        let note = Note::new(UserId::new("officer-1"), "Initial review done");
        let reference = note.reference.clone();
        let case = sample_case().with_note(note);

        assert_eq!(case.note(&reference).unwrap().text, "Initial review done");
        assert!(case.note(&NoteRef::new("missing")).is_none());
    }

    #[test]
    fn test_assignment() {
        let case = sample_case().with_assigned_user(UserId::new("officer-1"));
        assert!(case.is_assigned_to(&UserId::new("officer-1")));
        assert!(!case.is_assigned_to(&UserId::new("officer-2")));
    }
}
