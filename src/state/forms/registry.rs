//! The fixed manifest of fields making up the feedback form

use super::field::{Constraint, FieldDefinition, FieldKind};

/// Options offered by the gender selector
pub const GENDER_OPTIONS: &[&str] = &["male", "female", "other"];

const REQUIRED: &[Constraint] = &[Constraint::NonEmpty];

static FEEDBACK_FIELDS: &[FieldDefinition] = &[
    FieldDefinition {
        key: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
        constraints: REQUIRED,
    },
    FieldDefinition {
        key: "email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
        constraints: &[Constraint::NonEmpty, Constraint::EmailShape],
    },
    FieldDefinition {
        key: "feedback",
        label: "Feedback",
        kind: FieldKind::LongText,
        required: true,
        constraints: REQUIRED,
    },
    FieldDefinition {
        key: "age",
        label: "Age",
        kind: FieldKind::Number,
        required: true,
        constraints: REQUIRED,
    },
    FieldDefinition {
        key: "gender",
        label: "Gender",
        kind: FieldKind::SingleChoice(GENDER_OPTIONS),
        required: true,
        constraints: REQUIRED,
    },
    FieldDefinition {
        key: "country",
        label: "Country",
        kind: FieldKind::Text,
        required: true,
        constraints: REQUIRED,
    },
    FieldDefinition {
        key: "rating",
        label: "Rating",
        kind: FieldKind::Number,
        required: true,
        constraints: &[
            Constraint::NonEmpty,
            Constraint::NumericRange { min: 1.0, max: 5.0 },
        ],
    },
    FieldDefinition {
        key: "comments",
        label: "Additional Comments",
        kind: FieldKind::LongText,
        required: false,
        constraints: &[],
    },
    FieldDefinition {
        key: "address",
        label: "Address",
        kind: FieldKind::Text,
        required: true,
        constraints: REQUIRED,
    },
    FieldDefinition {
        key: "phone",
        label: "Phone Number",
        kind: FieldKind::Text,
        required: true,
        constraints: &[Constraint::NonEmpty, Constraint::DigitPattern { length: 10 }],
    },
    FieldDefinition {
        key: "occupation",
        label: "Occupation",
        kind: FieldKind::Text,
        required: true,
        constraints: REQUIRED,
    },
    FieldDefinition {
        key: "hobbies",
        label: "Hobbies",
        kind: FieldKind::LongText,
        required: false,
        constraints: &[],
    },
    FieldDefinition {
        key: "termsAccepted",
        label: "Accept Terms and Conditions",
        kind: FieldKind::Checkbox,
        required: true,
        constraints: &[Constraint::MustBeTrue],
    },
    FieldDefinition {
        key: "subscribe",
        label: "Subscribe to Newsletter",
        kind: FieldKind::Checkbox,
        required: false,
        constraints: &[],
    },
];

/// Ordered, immutable collection of field definitions
#[derive(Debug, Clone, Copy)]
pub struct FieldRegistry {
    fields: &'static [FieldDefinition],
}

impl FieldRegistry {
    /// The feedback form's field set
    pub fn feedback_form() -> Self {
        Self {
            fields: FEEDBACK_FIELDS,
        }
    }

    pub fn fields(&self) -> &'static [FieldDefinition] {
        self.fields
    }

    pub fn get(&self, key: &str) -> Option<&'static FieldDefinition> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::feedback_form()
    }
}
