//! Field checks shared by the booking and contact forms.
//!
//! Rules are keyed by field name, so any form that has a `mobile` field gets the
//! same phone check. Fields without a rule always pass.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

lazy_static! {
    static ref PHONE_PATTERN: Regex = Regex::new(r"^[0-9+\-\s()]{7,20}$").unwrap();
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub const NAME_REQUIRED: &str = "Name is required";
pub const MOBILE_REQUIRED: &str = "Mobile number is required";
pub const MOBILE_INVALID: &str = "Enter a valid phone number";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Field name → error message. Empty means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check a single field; `None` means it passes.
pub fn check_field(field: &str, value: &str) -> Option<&'static str> {
    let blank = value.trim().is_empty();
    match field {
        "name" if blank => Some(NAME_REQUIRED),
        "message" if blank => Some(MESSAGE_REQUIRED),
        "mobile" if blank => Some(MOBILE_REQUIRED),
        // the pattern runs on the raw value, only required-ness is trimmed
        "mobile" if !is_valid_phone(value) => Some(MOBILE_INVALID),
        "email" if blank => Some(EMAIL_REQUIRED),
        "email" if !is_valid_email(value.trim()) => Some(EMAIL_INVALID),
        _ => None,
    }
}

/// Validate a record of free-form string fields.
pub fn validate(record: &[(&str, &str)]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for (field, value) in record {
        if let Some(message) = check_field(field, value) {
            errors.insert(field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_and_mobile_yield_two_errors() {
        let errors = validate(&[("name", ""), ("mobile", "")]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.get("mobile"), Some(MOBILE_REQUIRED));
    }

    #[test]
    fn test_whitespace_name_is_blank() {
        let errors = validate(&[("name", "   "), ("mobile", "+92 300 1111111")]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(is_valid_phone("+92-300-1111111"));
        assert!(is_valid_phone("(051) 123 4567"));
        assert!(is_valid_phone("1234567"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("call me maybe"));
        assert!(!is_valid_phone("123456789012345678901"));

        let errors = validate(&[("mobile", "12ab")]);
        assert_eq!(errors.get("mobile"), Some(MOBILE_INVALID));
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("ali.khan@example.com"));
        assert!(!is_valid_email("ali.khan@example"));
        assert!(!is_valid_email("ali khan@example.com"));

        assert_eq!(validate(&[("email", " ")]).get("email"), Some(EMAIL_REQUIRED));
        assert_eq!(validate(&[("email", "nope")]).get("email"), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_contact_record() {
        let errors = validate(&[
            ("name", "Sara"),
            ("email", "sara@example.com"),
            ("mobile", "+92 333 2222222"),
            ("message", ""),
        ]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("message"), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_unknown_fields_pass() {
        assert!(validate(&[("guests", "")]).is_empty());
    }
}
