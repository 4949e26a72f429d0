//! Form domain layer
//!
//! Field registry, live form values, the validation engine and the
//! session that ties them to the notification layer.

mod error;
mod field;
mod form_state;
mod registry;
mod session;
mod validation;

pub use error::{FormError, ValidationError};
pub use field::{Constraint, ConstraintKind, FieldDefinition, FieldKind, InputValue};
pub use form_state::FormState;
pub use registry::{FieldRegistry, GENDER_OPTIONS};
pub use session::{FormSession, SUCCESS_MESSAGE};
pub use validation::{validate, ValidationFailure, Verdict};
