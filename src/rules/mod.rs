//! Field rules shared by the form client and the API handlers.
//!
//! Each form has one request type that is both the client-side form model and
//! the server-side payload. The rules return typed violations; the client turns
//! them into inline field errors and the handlers turn them into `{message}`
//! responses, so both sides agree on field names, limits and rule order.

pub mod login;
pub mod password;
pub mod profile;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::{collections::BTreeMap, sync::LazyLock};

/// Minimum password length for login and password change.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name (wire name) to error message. Empty means valid.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// A rule violation tied to a single form field.
pub trait Violation {
    /// Wire name of the field at fault, e.g. `fullName`.
    fn field(&self) -> &'static str;

    /// Message shown next to the field.
    fn field_message(&self) -> &'static str;
}

/// Collect violations into a field error mapping, keeping the first message per field.
pub fn field_errors<V: Violation>(violations: &[V]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for violation in violations {
        errors
            .entry(violation.field())
            .or_insert_with(|| violation.field_message());
    }

    errors
}

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

pub fn valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Length in Unicode scalar values.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Current local date, used for the birth date rule.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Deserialize a string field. Anything that is not a string (`null`, numbers,
/// objects) counts as missing and becomes an empty string.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(value),
        _ => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("john@example.com"));
        assert!(valid_email("a.b+tag@sub.example.org"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("john@example"));
        assert!(!valid_email("john doe@example.com"));
        assert!(!valid_email(""));
    }

    #[derive(Deserialize)]
    struct Named {
        #[serde(default, deserialize_with = "string_or_empty")]
        name: String,
    }

    #[test]
    fn non_string_fields_are_empty() {
        for body in [
            r#"{"name": null}"#,
            r#"{"name": 42}"#,
            r#"{"name": true}"#,
            r#"{"name": ["a"]}"#,
            r#"{"name": {"first": "a"}}"#,
            r#"{}"#,
        ] {
            let named: Named = serde_json::from_str(body).unwrap();
            assert_eq!(named.name, "", "{body}");
        }

        let named: Named = serde_json::from_str(r#"{"name": "john"}"#).unwrap();
        assert_eq!(named.name, "john");
    }

    #[test]
    fn char_len_counts_scalars_not_bytes() {
        assert_eq!(char_len("abcdef"), 6);
        assert_eq!(char_len("ñandú"), 5);
        assert_eq!(char_len(""), 0);
    }

    #[derive(Debug)]
    struct Fixed(&'static str, &'static str);

    impl Violation for Fixed {
        fn field(&self) -> &'static str {
            self.0
        }

        fn field_message(&self) -> &'static str {
            self.1
        }
    }

    #[test]
    fn field_errors_keeps_first_message_per_field() {
        let errors = field_errors(&[
            Fixed("email", "first"),
            Fixed("phone", "phone"),
            Fixed("email", "second"),
        ]);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some(&"first"));
        assert_eq!(errors.get("phone"), Some(&"phone"));
    }
}
