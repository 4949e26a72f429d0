//! Form field value objects

use regex::Regex;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;

/// Input kind of a field, decides how it is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    LongText,
    SingleChoice(&'static [&'static str]),
    Checkbox,
}

impl FieldKind {
    pub fn is_checkbox(&self) -> bool {
        matches!(self, FieldKind::Checkbox)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::LongText)
    }

    /// Value a fresh form holds for this kind
    pub fn empty_value(&self) -> InputValue {
        match self {
            FieldKind::Checkbox => InputValue::Bool(false),
            _ => InputValue::Text(String::new()),
        }
    }
}

/// Tag identifying which rule a constraint (or a failure) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    NonEmpty,
    EmailShape,
    NumericRange,
    DigitPattern,
    MustBeTrue,
}

/// A single rule over one field's raw value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    NonEmpty,
    EmailShape,
    NumericRange { min: f64, max: f64 },
    DigitPattern { length: usize },
    MustBeTrue,
}

/// Minimal `local@domain.tld` shape with no whitespace and a single `@`
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email shape regex")
    })
}

impl Constraint {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::NonEmpty => ConstraintKind::NonEmpty,
            Constraint::EmailShape => ConstraintKind::EmailShape,
            Constraint::NumericRange { .. } => ConstraintKind::NumericRange,
            Constraint::DigitPattern { .. } => ConstraintKind::DigitPattern,
            Constraint::MustBeTrue => ConstraintKind::MustBeTrue,
        }
    }

    /// Returns true when `value` satisfies this constraint
    pub fn check(&self, value: &InputValue) -> bool {
        match self {
            Constraint::NonEmpty => !value.is_empty(),
            Constraint::EmailShape => value
                .as_text()
                .is_some_and(|text| email_regex().is_match(text)),
            Constraint::NumericRange { min, max } => value
                .as_number()
                .is_some_and(|n| n >= *min && n <= *max),
            Constraint::DigitPattern { length } => value.as_text().is_some_and(|text| {
                text.len() == *length && text.bytes().all(|b| b.is_ascii_digit())
            }),
            Constraint::MustBeTrue => value.as_bool() == Some(true),
        }
    }
}

/// Static description of one labeled input
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub constraints: &'static [Constraint],
}

impl FieldDefinition {
    /// Whether the required-field sweep counts this field as missing.
    ///
    /// Checkboxes are never missing here: a required checkbox states its
    /// requirement through `MustBeTrue`, which gets its own message.
    /// A number field holding text that does not parse counts as empty.
    pub fn is_missing(&self, value: &InputValue) -> bool {
        self.required
            && match self.kind {
                FieldKind::Checkbox => false,
                FieldKind::Number => value.as_number().is_none(),
                _ => value.is_empty(),
            }
    }
}

/// Current value of a field
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Default for InputValue {
    fn default() -> Self {
        InputValue::Text(String::new())
    }
}

impl InputValue {
    pub fn is_empty(&self) -> bool {
        match self {
            InputValue::Text(s) => s.is_empty(),
            InputValue::Number(_) => false,
            InputValue::Bool(b) => !b,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InputValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric reading of the value; text is trimmed and parsed.
    /// Non-numeric text, NaN and infinities have no numeric reading.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            InputValue::Number(n) => *n,
            InputValue::Text(s) => s.trim().parse::<f64>().ok()?,
            InputValue::Bool(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            InputValue::Text(s) => s.clone(),
            InputValue::Number(n) => n.to_string(),
            InputValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Text(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Text(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Number(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Bool(value)
    }
}

impl Serialize for InputValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InputValue::Text(s) => serializer.serialize_str(s),
            InputValue::Number(n) => serializer.serialize_f64(*n),
            InputValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}
