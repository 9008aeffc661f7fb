//! Creation form state machine.
//!
//! Collects a new provider record field by field. Every keystroke updates
//! the field's value and marks it touched; an error is shown only for
//! touched-and-invalid fields, so a pristine form starts clean. Submission
//! first marks everything touched (a failed submit on an untouched form must
//! reveal every error), then emits and resets only if the whole form is
//! valid.

use std::collections::BTreeSet;

use crate::record::{Field, ProviderRecord};
use crate::validate::{is_valid, record_is_valid};

#[derive(Debug, Default)]
pub struct ProviderForm {
    values: ProviderRecord,
    touched: BTreeSet<Field>,
}

impl ProviderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of one field.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Record a keystroke: update the value and mark the field touched.
    pub fn input(&mut self, field: Field, text: impl Into<String>) {
        self.values.set(field, text.into());
        self.touched.insert(field);
    }

    /// The error message to display for a field, if any.
    ///
    /// Shown iff the field has been touched and its current value is
    /// invalid; clears on its own once the value becomes valid.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        if self.is_touched(field) && !is_valid(field, self.value(field)) {
            Some(field.error_message())
        } else {
            None
        }
    }

    /// Whether the submit control is enabled right now.
    pub fn can_submit(&self) -> bool {
        record_is_valid(&self.values)
    }

    /// Attempt submission.
    ///
    /// Marks every field touched regardless of outcome. Emits the completed
    /// record and resets to pristine only when every field is valid.
    pub fn submit(&mut self) -> Option<ProviderRecord> {
        self.touched.extend(Field::ALL);
        if !record_is_valid(&self.values) {
            return None;
        }
        self.touched.clear();
        Some(std::mem::take(&mut self.values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid(form: &mut ProviderForm) {
        form.input(Field::FirstName, "John");
        form.input(Field::LastName, "Smith");
        form.input(Field::EmailAddress, "john@smith.com");
        form.input(Field::Specialty, "Cardiology");
        form.input(Field::PracticeName, "Smith Clinic");
    }

    #[test]
    fn pristine_form_shows_no_errors() {
        let form = ProviderForm::new();
        for field in Field::ALL {
            assert_eq!(form.error(field), None);
        }
        assert!(!form.can_submit());
    }

    #[test]
    fn error_appears_once_touched_and_clears_when_valid() {
        let mut form = ProviderForm::new();
        form.input(Field::LastName, "X");
        assert_eq!(
            form.error(Field::LastName),
            Some("Enter a valid last name (required, min 2 letters)")
        );
        form.input(Field::LastName, "Xavier");
        assert_eq!(form.error(Field::LastName), None);
    }

    #[test]
    fn submit_enables_only_when_every_field_valid() {
        let mut form = ProviderForm::new();
        form.input(Field::FirstName, "John");
        form.input(Field::EmailAddress, "john@smith.com");
        assert!(!form.can_submit(), "last_name still empty");
        form.input(Field::LastName, "Smith");
        assert!(form.can_submit(), "optional fields may stay empty");
    }

    #[test]
    fn failed_submit_touches_everything_and_keeps_state() {
        let mut form = ProviderForm::new();
        assert_eq!(form.submit(), None);
        for field in Field::ALL {
            assert!(form.is_touched(field));
        }
        // Required fields are blank, so their errors are now visible.
        assert!(form.error(Field::FirstName).is_some());
        assert!(form.error(Field::Specialty).is_none(), "optional blank is valid");
    }

    #[test]
    fn successful_submit_emits_record_and_resets() {
        let mut form = ProviderForm::new();
        fill_valid(&mut form);
        let record = form.submit().expect("form is valid");
        assert_eq!(record.last_name, "Smith");
        assert_eq!(record.practice_name, "Smith Clinic");
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_touched(field));
        }
        assert!(!form.can_submit());
    }
}
