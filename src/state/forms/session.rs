//! Form session: owns the in-progress values and runs the submit workflow

use super::error::FormError;
use super::field::{FieldKind, InputValue};
use super::form_state::FormState;
use super::registry::FieldRegistry;
use super::validation::{validate, ValidationFailure, Verdict};
use crate::notify::Notifier;

/// Message shown when a submission is accepted
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// One in-progress form entry, reporting outcomes through `N`
#[derive(Debug)]
pub struct FormSession<N: Notifier> {
    registry: FieldRegistry,
    state: FormState,
    notifier: N,
    last_failure: Option<ValidationFailure>,
}

impl<N: Notifier> FormSession<N> {
    pub fn new(registry: FieldRegistry, notifier: N) -> Self {
        Self {
            state: FormState::new(&registry),
            registry,
            notifier,
            last_failure: None,
        }
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn value(&self, key: &str) -> Option<&InputValue> {
        self.state.get(key)
    }

    /// Failure reported by the most recent submit, if it was rejected
    pub fn last_failure(&self) -> Option<&ValidationFailure> {
        self.last_failure.as_ref()
    }

    /// Overwrite one field's value. No validation happens here.
    ///
    /// Checkboxes take booleans; every other kind takes text, numeric
    /// fields may also take a number.
    pub fn apply_edit(
        &mut self,
        key: &str,
        value: impl Into<InputValue>,
    ) -> Result<(), FormError> {
        let field = self
            .registry
            .get(key)
            .ok_or_else(|| FormError::UnknownField {
                key: key.to_string(),
            })?;
        let value = value.into();

        let fits = match (&field.kind, &value) {
            (FieldKind::Checkbox, InputValue::Bool(_)) => true,
            (FieldKind::Checkbox, _) => false,
            (FieldKind::Number, InputValue::Number(_)) => true,
            (_, InputValue::Text(_)) => true,
            _ => false,
        };
        if !fits {
            return Err(FormError::KindMismatch {
                key: key.to_string(),
                expected: expected_shape(&field.kind),
            });
        }

        tracing::trace!(field = key, "applied edit");
        self.state.set(key, value);
        Ok(())
    }

    /// Validate the current values and report the outcome.
    ///
    /// Returns the accepted snapshot, or `None` when rejected. A rejection
    /// is reported through the notifier, never as an error.
    pub fn submit(&mut self) -> Option<FormState> {
        match validate(&self.registry, &self.state) {
            Verdict::Accepted(snapshot) => {
                self.last_failure = None;
                match serde_json::to_string(&snapshot) {
                    Ok(json) => tracing::info!(form = %json, "form accepted"),
                    Err(e) => tracing::warn!("Failed to serialize accepted form: {e}"),
                }
                self.notifier.notify_success(SUCCESS_MESSAGE);
                Some(snapshot)
            }
            Verdict::Rejected(failures) => {
                let failure = failures.into_iter().next()?;
                tracing::debug!(
                    field = failure.field_key,
                    constraint = ?failure.constraint,
                    "form rejected"
                );
                self.notifier.notify_error(&failure.message());
                self.last_failure = Some(failure);
                None
            }
        }
    }
}

fn expected_shape(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Checkbox => "boolean",
        FieldKind::Number => "numeric or text",
        _ => "text",
    }
}
