//! Flash store: read-once transient state across a redirect
//!
//! Validation errors and submitted form values must survive exactly one
//! redirect so the user's input is never silently lost. The store is an
//! explicit dependency handed to the route layer, not ambient state, and
//! every read consumes the value: a value read for rendering is gone for
//! any subsequent read.

use caseflow_types::{DecisionSubmission, ValidationErrors};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Key under which validation errors are carried
pub const ERRORS_KEY: &str = "validation-errors";
/// Key under which submitted form values are carried
pub const FORM_KEY: &str = "form-values";

/// Single-read, single-write transient storage scoped to one session
pub trait FlashStore: Send + Sync {
    /// Store a value for the next request
    fn set(&self, key: &str, value: Value);

    /// Read and consume a value. Returns `None` if nothing was stored or
    /// the value was already read.
    fn take(&self, key: &str) -> Option<Value>;

    /// Carry validation errors to the next rendered page
    fn set_errors(&self, errors: &ValidationErrors) -> serde_json::Result<()> {
        self.set(ERRORS_KEY, serde_json::to_value(errors)?);
        Ok(())
    }

    /// Consume carried validation errors, if any
    fn take_errors(&self) -> Option<ValidationErrors> {
        self.take(ERRORS_KEY)
            .and_then(|v| serde_json::from_value(v).ok())
    }

    /// Carry the submitted decision form values to the next rendered page
    fn set_form(&self, form: &DecisionSubmission) -> serde_json::Result<()> {
        self.set(FORM_KEY, serde_json::to_value(form)?);
        Ok(())
    }

    /// Consume carried form values, if any
    fn take_form(&self) -> Option<DecisionSubmission> {
        self.take(FORM_KEY)
            .and_then(|v| serde_json::from_value(v).ok())
    }
}

/// In-memory [`FlashStore`] scoped to one browser session
#[derive(Default)]
pub struct SessionFlash {
    values: RwLock<HashMap<String, Value>>,
}

impl SessionFlash {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlashStore for SessionFlash {
    fn set(&self, key: &str, value: Value) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value);
    }

    fn take(&self, key: &str) -> Option<Value> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caseflow_types::FieldError;

    #[test]
    fn test_take_consumes_the_value() {
        let flash = SessionFlash::new();
        flash.set("greeting", Value::String("hello".to_string()));

        assert_eq!(flash.take("greeting"), Some(Value::String("hello".to_string())));
        assert_eq!(flash.take("greeting"), None);
    }

    #[test]
    fn test_take_unset_key() {
        let flash = SessionFlash::new();
        assert_eq!(flash.take("never-set"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let flash = SessionFlash::new();
        flash.set("k", Value::from(1));
        flash.set("k", Value::from(2));
        assert_eq!(flash.take("k"), Some(Value::from(2)));
    }

    #[test]
    fn test_errors_round_trip_once() {
        let flash = SessionFlash::new();
        let errors = ValidationErrors::single(
            "REJECT-comment",
            FieldError::for_field("Rejection reason is required", "REJECT-comment"),
        );
        flash.set_errors(&errors).unwrap();

        assert_eq!(flash.take_errors(), Some(errors));
        assert_eq!(flash.take_errors(), None);
    }

    #[test]
    fn test_form_round_trip_once() {
        let flash = SessionFlash::new();
        let form = DecisionSubmission::new()
            .with_action("REJECT")
            .with_comment("Not eligible");
        flash.set_form(&form).unwrap();

        assert_eq!(flash.take_form(), Some(form));
        assert_eq!(flash.take_form(), None);
    }
}
