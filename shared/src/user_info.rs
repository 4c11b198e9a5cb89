use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::validation::*;

/// Contact details collected before a spin is allowed.
/// `phone` carries the date of birth text entered on the form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[validate(custom = "validate_first_name")]
    pub first_name: String,
    #[validate(custom = "validate_last_name")]
    pub last_name: String,
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_date_of_birth")]
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntakeField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl IntakeField {
    pub const ALL: [IntakeField; 4] = [
        IntakeField::FirstName,
        IntakeField::LastName,
        IntakeField::Email,
        IntakeField::Phone,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IntakeField::FirstName => "firstName",
            IntakeField::LastName => "lastName",
            IntakeField::Email => "email",
            IntakeField::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntakeField::FirstName => "First Name",
            IntakeField::LastName => "Last Name",
            IntakeField::Email => "Email Address",
            IntakeField::Phone => "Date of Birth",
        }
    }

    // Accepts both the struct field name and the serialized name
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "first_name" | "firstName" => Some(IntakeField::FirstName),
            "last_name" | "lastName" => Some(IntakeField::LastName),
            "email" => Some(IntakeField::Email),
            "phone" => Some(IntakeField::Phone),
            _ => None,
        }
    }
}

pub type FieldErrors = BTreeMap<IntakeField, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum IntakeError {
    InvalidFields(FieldErrors),
    TermsNotAccepted,
    SubmissionInProgress,
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::InvalidFields(errors) => {
                let fields: Vec<&str> = errors.keys().map(|k| k.name()).collect();
                write!(f, "invalid fields: {}", fields.join(", "))
            }
            IntakeError::TermsNotAccepted => write!(f, "terms have not been accepted"),
            IntakeError::SubmissionInProgress => write!(f, "a submission is already in progress"),
        }
    }
}

impl std::error::Error for IntakeError {}

impl From<ValidationErrors> for IntakeError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (key, list) in errors.field_errors() {
            let Some(field) = IntakeField::from_key(key) else {
                continue;
            };
            if let Some(message) = list.iter().find_map(|e| e.message.as_ref()) {
                fields.insert(field, message.to_string());
            }
        }
        IntakeError::InvalidFields(fields)
    }
}

/// State behind the intake form: candidate values, consent flags and
/// the errors from the last submission attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntakeForm {
    pub info: UserInfo,
    pub agreed_to_terms: bool,
    pub agreed_to_emails: bool,
    pub agreed_to_exclusive: bool,
    pub errors: FieldErrors,
    pub is_submitting: bool,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::FirstName => &self.info.first_name,
            IntakeField::LastName => &self.info.last_name,
            IntakeField::Email => &self.info.email,
            IntakeField::Phone => &self.info.phone,
        }
    }

    /// Editing a field clears its error; other errors stay until the next submit.
    pub fn set_field(&mut self, field: IntakeField, value: String) {
        let slot = match field {
            IntakeField::FirstName => &mut self.info.first_name,
            IntakeField::LastName => &mut self.info.last_name,
            IntakeField::Email => &mut self.info.email,
            IntakeField::Phone => &mut self.info.phone,
        };
        *slot = value;
        self.errors.remove(&field);
    }

    pub fn error(&self, field: IntakeField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether the submit control accepts a press. The terms gate is
    /// checked by `submit` so that a blocked attempt can be reported.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting
    }

    /// Validates every field and the terms gate. On success the record is
    /// returned as entered and the form is marked as submitting.
    pub fn submit(&mut self) -> Result<UserInfo, IntakeError> {
        if self.is_submitting {
            return Err(IntakeError::SubmissionInProgress);
        }

        self.errors.clear();
        if let Err(errors) = self.info.validate() {
            let err = IntakeError::from(errors);
            if let IntakeError::InvalidFields(fields) = &err {
                self.errors = fields.clone();
                log::debug!("Intake rejected {} field(s)", fields.len());
            }
            return Err(err);
        }

        if !self.agreed_to_terms {
            log::debug!("Intake blocked until terms are accepted");
            return Err(IntakeError::TermsNotAccepted);
        }

        self.is_submitting = true;
        log::info!("Intake accepted");
        Ok(self.info.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn pat() -> UserInfo {
        UserInfo {
            first_name: "Pat".to_string(),
            last_name: "Doe".to_string(),
            email: "pat@example.com".to_string(),
            phone: "01/01/2000".to_string(),
        }
    }

    fn filled_form() -> IntakeForm {
        IntakeForm {
            info: pat(),
            ..IntakeForm::default()
        }
    }

    #[test]
    fn test_valid_submission_emits_record_unchanged() {
        let mut form = filled_form();
        form.agreed_to_terms = true;
        let record = form.submit().unwrap();
        assert_eq!(record, pat());
        assert!(form.is_submitting);
        assert!(form.errors.is_empty());
        assert!(!form.can_submit());
        assert_eq!(form.submit(), Err(IntakeError::SubmissionInProgress));
    }

    #[test]
    fn test_terms_gate_is_not_a_field_error() {
        let mut form = filled_form();
        // Unchecked terms leave the control pressable so the gate can report
        assert!(form.can_submit());
        assert_eq!(form.submit(), Err(IntakeError::TermsNotAccepted));
        assert!(form.errors.is_empty());
        assert!(!form.is_submitting);
    }

    #[test]
    fn test_every_invalid_field_reported() {
        let mut form = IntakeForm::new();
        form.agreed_to_terms = true;
        form.set_field(IntakeField::Email, "not-an-email".to_string());

        let err = form.submit().unwrap_err();
        let IntakeError::InvalidFields(fields) = err else {
            panic!("expected field errors");
        };
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[&IntakeField::FirstName], FIRST_NAME_REQUIRED_ERROR);
        assert_eq!(fields[&IntakeField::LastName], LAST_NAME_REQUIRED_ERROR);
        assert_eq!(fields[&IntakeField::Email], INVALID_EMAIL_ERROR);
        assert_eq!(fields[&IntakeField::Phone], DATE_OF_BIRTH_REQUIRED_ERROR);
        assert_eq!(form.error(IntakeField::Phone), Some(DATE_OF_BIRTH_REQUIRED_ERROR));
    }

    #[test]
    fn test_field_errors_win_over_terms_gate() {
        let mut form = filled_form();
        form.set_field(IntakeField::LastName, "  ".to_string());
        match form.submit() {
            Err(IntakeError::InvalidFields(fields)) => {
                assert_eq!(fields.keys().copied().collect::<Vec<_>>(), vec![IntakeField::LastName]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = IntakeForm::new();
        let _ = form.submit();
        assert_eq!(form.errors.len(), 4);

        form.set_field(IntakeField::FirstName, "P".to_string());
        assert!(form.error(IntakeField::FirstName).is_none());
        assert_eq!(form.error(IntakeField::Email), Some(EMAIL_REQUIRED_ERROR));
        assert_eq!(form.value(IntakeField::FirstName), "P");
    }

    #[test]
    fn test_resubmission_reruns_validation() {
        let mut form = IntakeForm::new();
        form.agreed_to_terms = true;
        assert!(form.submit().is_err());

        for field in IntakeField::ALL {
            let value = pat();
            let value = match field {
                IntakeField::FirstName => value.first_name,
                IntakeField::LastName => value.last_name,
                IntakeField::Email => value.email,
                IntakeField::Phone => value.phone,
            };
            form.set_field(field, value);
        }
        assert_eq!(form.submit(), Ok(pat()));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(pat()).unwrap();
        assert_eq!(json["firstName"], "Pat");
        assert_eq!(json["phone"], "01/01/2000");
        assert_eq!(IntakeField::FirstName.name(), "firstName");
        assert_eq!(IntakeField::Phone.label(), "Date of Birth");
    }
}
