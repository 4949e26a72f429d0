//! Validation engine: maps a form's values to a verdict
//!
//! Rules run in a fixed order and stop at the first failure:
//! 1. required-field sweep over every field in registry order
//! 2. each field's remaining constraints, again in registry order
//!
//! For the feedback form step 2 amounts to email shape, rating range,
//! phone digits and terms acceptance, in that order.

use super::error::ValidationError;
use super::field::{Constraint, ConstraintKind, FieldDefinition};
use super::form_state::FormState;
use super::registry::FieldRegistry;

/// One reported failure
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub field_key: &'static str,
    pub constraint: ConstraintKind,
    pub error: ValidationError,
}

impl ValidationFailure {
    /// User-facing message
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Outcome of one validation pass
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted(FormState),
    Rejected(Vec<ValidationFailure>),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// First failure, if rejected
    pub fn first_failure(&self) -> Option<&ValidationFailure> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(failures) => failures.first(),
        }
    }
}

/// Validate `state` against `registry`.
///
/// Pure: the same inputs always yield the same verdict. A rejection holds
/// exactly one failure, from the earliest rule that fired.
pub fn validate(registry: &FieldRegistry, state: &FormState) -> Verdict {
    match first_failure(registry, state) {
        Some(failure) => Verdict::Rejected(vec![failure]),
        None => Verdict::Accepted(state.clone()),
    }
}

fn first_failure(registry: &FieldRegistry, state: &FormState) -> Option<ValidationFailure> {
    let fields = registry.fields();

    if let Some(field) = fields.iter().find(|f| {
        let fallback = f.kind.empty_value();
        f.is_missing(state.get(f.key).unwrap_or(&fallback))
    }) {
        return Some(ValidationFailure {
            field_key: field.key,
            constraint: ConstraintKind::NonEmpty,
            error: ValidationError::MissingRequiredField,
        });
    }

    for field in fields {
        let fallback = field.kind.empty_value();
        let value = state.get(field.key).unwrap_or(&fallback);

        // Optional fields left blank are not shape-checked
        if !field.required && value.is_empty() {
            continue;
        }

        for constraint in field.constraints {
            if constraint.kind() == ConstraintKind::NonEmpty || constraint.check(value) {
                continue;
            }
            return Some(ValidationFailure {
                field_key: field.key,
                constraint: constraint.kind(),
                error: error_for(field, constraint),
            });
        }
    }

    None
}

fn error_for(field: &FieldDefinition, constraint: &Constraint) -> ValidationError {
    match *constraint {
        Constraint::NonEmpty => ValidationError::MissingRequiredField,
        Constraint::EmailShape => ValidationError::InvalidEmailShape,
        Constraint::NumericRange { min, max } => ValidationError::RatingOutOfRange {
            label: field.label,
            min,
            max,
        },
        Constraint::DigitPattern { .. } => ValidationError::InvalidPhoneShape,
        Constraint::MustBeTrue => ValidationError::TermsNotAccepted,
    }
}
