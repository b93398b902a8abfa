use regex::Regex;
use shared_types::FieldErrorsResponse;
use std::sync::OnceLock;

use crate::phone_mask::MAX_DIGITS;

const MIN_NAME_CHARS: usize = 2;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Raised when a draft is submitted with at least one invalid field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid contact fields: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
    pub validation: FieldValidation,
}

pub fn is_name_invalid(name: &str) -> bool {
    name.trim().chars().count() < MIN_NAME_CHARS
}

pub fn is_lastname_invalid(lastname: &str) -> bool {
    is_name_invalid(lastname)
}

pub fn is_email_invalid(email: &str) -> bool {
    !email_regex().is_match(email)
}

pub fn is_phone_invalid(number: &str) -> bool {
    number.chars().filter(|c| c.is_ascii_digit()).count() < MAX_DIGITS
}

/// "Is invalid" flag per form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldValidation {
    pub name: bool,
    pub lastname: bool,
    pub email: bool,
    pub number: bool,
}

impl FieldValidation {
    pub fn check(name: &str, lastname: &str, email: &str, number: &str) -> Self {
        Self {
            name: is_name_invalid(name),
            lastname: is_lastname_invalid(lastname),
            email: is_email_invalid(email),
            number: is_phone_invalid(number),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name && !self.lastname && !self.email && !self.number
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name),
            ("lastname", self.lastname),
            ("email", self.email),
            ("number", self.number),
        ]
        .into_iter()
        .filter_map(|(field, invalid)| invalid.then_some(field))
        .collect()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: self.invalid_fields(),
                validation: self,
            })
        }
    }
}

impl From<FieldValidation> for FieldErrorsResponse {
    fn from(validation: FieldValidation) -> Self {
        Self {
            name: validation.name,
            lastname: validation.lastname,
            email: validation.email,
            number: validation.number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(!is_email_invalid("a@b.com"));
        assert!(!is_email_invalid("jane.doe+work@mail.example.org"));
        assert!(is_email_invalid("not-an-email"));
        assert!(is_email_invalid("jane@doe"));
        assert!(is_email_invalid(""));
        assert!(is_email_invalid(" jane@doe.com"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_phone_invalid("123456789"));
        assert!(!is_phone_invalid("1234567890"));
        assert!(is_phone_invalid(""));
        assert!(is_phone_invalid("12345abcde"));
    }

    #[test]
    fn test_name_uses_trimmed_length() {
        assert!(is_name_invalid(""));
        assert!(is_name_invalid("J"));
        assert!(is_name_invalid(" "));
        assert!(is_name_invalid("  J  "));
        assert!(!is_name_invalid("Jo"));
        assert!(!is_lastname_invalid("Doe"));
    }

    #[test]
    fn test_field_validation_gates_submission() {
        let valid = FieldValidation::check("Jane", "Doe", "jane@doe.com", "5551234567");
        assert!(valid.is_valid());
        assert!(valid.into_result().is_ok());

        let invalid = FieldValidation::check("J", "Doe", "jane", "5551234567");
        assert!(!invalid.is_valid());
        assert_eq!(invalid.invalid_fields(), vec!["name", "email"]);

        let err = invalid.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Invalid contact fields: name, email");
    }

    #[test]
    fn test_field_errors_response_conversion() {
        let response: FieldErrorsResponse = FieldValidation::check("", "", "", "").into();
        assert!(response.name && response.lastname && response.email && response.number);
    }
}
