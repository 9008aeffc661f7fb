//! Field validation rules.
//!
//! One rule table drives both the creation form and the inline cell editor,
//! so the two can never drift apart. A rule is a required flag, a pattern,
//! a display label, and the error message shown when the value fails.
//!
//! Validation never throws: the outcome is a boolean, and the caller decides
//! whether and where to surface the error message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::{Field, ProviderRecord};

/// Letters, spaces, apostrophes, hyphens; at least two characters.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]{2,}$").expect("name pattern compiles"));

/// local-part @ domain . tld, none of which may contain whitespace or '@'.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Any two or more characters.
static FREE_TEXT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.{2,}$").expect("free text pattern compiles"));

/// Validation rule for one provider field.
pub struct FieldRule {
    pub required: bool,
    pub label: &'static str,
    pub error_message: &'static str,
    pattern: &'static Lazy<Regex>,
}

impl FieldRule {
    /// Raw pattern test, without the required/optional-empty handling.
    pub fn pattern_matches(&self, raw: &str) -> bool {
        self.pattern.is_match(raw)
    }
}

static FIRST_NAME_RULE: FieldRule = FieldRule {
    required: true,
    label: "First Name",
    error_message: "Enter a valid first name (required, min 2 letters)",
    pattern: &NAME_PATTERN,
};

static LAST_NAME_RULE: FieldRule = FieldRule {
    required: true,
    label: "Last Name",
    error_message: "Enter a valid last name (required, min 2 letters)",
    pattern: &NAME_PATTERN,
};

static EMAIL_RULE: FieldRule = FieldRule {
    required: true,
    label: "Email Address",
    error_message: "Enter a valid email address (required)",
    pattern: &EMAIL_PATTERN,
};

static SPECIALTY_RULE: FieldRule = FieldRule {
    required: false,
    label: "Specialty",
    error_message: "Enter a valid specialty (letters, spaces, apostrophes, hyphens, min 2 chars)",
    pattern: &NAME_PATTERN,
};

static PRACTICE_NAME_RULE: FieldRule = FieldRule {
    required: false,
    label: "Practice Name",
    error_message: "Enter a valid practice name (min 2 chars)",
    pattern: &FREE_TEXT_PATTERN,
};

impl Field {
    /// The single source-of-truth rule for this field.
    pub fn rule(self) -> &'static FieldRule {
        match self {
            Field::FirstName => &FIRST_NAME_RULE,
            Field::LastName => &LAST_NAME_RULE,
            Field::EmailAddress => &EMAIL_RULE,
            Field::Specialty => &SPECIALTY_RULE,
            Field::PracticeName => &PRACTICE_NAME_RULE,
        }
    }

    pub fn label(self) -> &'static str {
        self.rule().label
    }

    pub fn error_message(self) -> &'static str {
        self.rule().error_message
    }

    pub fn is_required(self) -> bool {
        self.rule().required
    }
}

/// Validate one field value.
///
/// A required field with a blank (trimmed-empty) value is invalid. An
/// optional field with a blank value is valid. Anything else is the rule's
/// pattern tested against the RAW, untrimmed value.
pub fn is_valid(field: Field, raw: &str) -> bool {
    let rule = field.rule();
    if raw.trim().is_empty() {
        return !rule.required;
    }
    rule.pattern_matches(raw)
}

/// A record is valid iff every field passes [`is_valid`].
pub fn record_is_valid(record: &ProviderRecord) -> bool {
    Field::ALL
        .iter()
        .all(|&field| is_valid(field, record.get(field)))
}
