use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::*;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex")
});

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email_shape(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(error_with_message("first_name_required", FIRST_NAME_REQUIRED_ERROR));
    }
    Ok(())
}

pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(error_with_message("last_name_required", LAST_NAME_REQUIRED_ERROR));
    }
    Ok(())
}

/// Blank and malformed addresses get distinct messages.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) {
        return Err(error_with_message("email_required", EMAIL_REQUIRED_ERROR));
    }
    if !is_valid_email_shape(email) {
        return Err(error_with_message("invalid_email_format", INVALID_EMAIL_ERROR));
    }
    Ok(())
}

// Date of birth is free text; only presence is checked
pub fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(error_with_message("date_of_birth_required", DATE_OF_BIRTH_REQUIRED_ERROR));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("pat@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.domain.org").is_ok());

        let missing = validate_email("   ").unwrap_err();
        assert_eq!(missing.code, "email_required");

        for bad in ["pat", "pat@example", "pat@@example.com", "pat @example.com", "@example.com"] {
            let err = validate_email(bad).unwrap_err();
            assert_eq!(err.message.as_deref(), Some(INVALID_EMAIL_ERROR), "{bad}");
        }
    }

    #[test]
    fn test_blank_names_rejected() {
        assert!(validate_first_name("Pat").is_ok());
        assert_eq!(
            validate_first_name(" \t").unwrap_err().message.as_deref(),
            Some(FIRST_NAME_REQUIRED_ERROR)
        );
        assert_eq!(
            validate_last_name("").unwrap_err().message.as_deref(),
            Some(LAST_NAME_REQUIRED_ERROR)
        );
    }

    #[test]
    fn test_date_of_birth_format_not_checked() {
        assert!(validate_date_of_birth("01/01/2000").is_ok());
        assert!(validate_date_of_birth("sometime in spring").is_ok());
        assert!(validate_date_of_birth("").is_err());
    }
}
