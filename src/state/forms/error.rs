//! Error types for form editing and validation

use thiserror::Error;

/// User-input failures reported by the validation engine.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill all required fields.")]
    MissingRequiredField,

    #[error("Please enter a valid email address.")]
    InvalidEmailShape,

    #[error("{label} must be between {min} and {max}.")]
    RatingOutOfRange {
        label: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Please enter a valid phone number.")]
    InvalidPhoneShape,

    #[error("You must accept the terms and conditions.")]
    TermsNotAccepted,
}

/// Errors from editing a form session with an invalid key or value shape
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// No field with this key exists in the registry
    #[error("unknown field: {key}")]
    UnknownField { key: String },

    /// Value shape does not match the field kind
    #[error("field '{key}' expects a {expected} value")]
    KindMismatch { key: String, expected: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingRequiredField.to_string(),
            "Please fill all required fields."
        );
        assert_eq!(
            ValidationError::InvalidEmailShape.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            ValidationError::InvalidPhoneShape.to_string(),
            "Please enter a valid phone number."
        );
        assert_eq!(
            ValidationError::TermsNotAccepted.to_string(),
            "You must accept the terms and conditions."
        );
    }

    #[test]
    fn test_range_message_formats_whole_bounds() {
        let err = ValidationError::RatingOutOfRange {
            label: "Rating",
            min: 1.0,
            max: 5.0,
        };
        assert_eq!(err.to_string(), "Rating must be between 1 and 5.");
    }

    #[test]
    fn test_form_error_display() {
        let err = FormError::UnknownField {
            key: "nickname".into(),
        };
        assert_eq!(err.to_string(), "unknown field: nickname");

        let err = FormError::KindMismatch {
            key: "subscribe".into(),
            expected: "boolean",
        };
        assert_eq!(err.to_string(), "field 'subscribe' expects a boolean value");
    }
}
