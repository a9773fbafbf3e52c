//! Profile rules. Every rule is evaluated; a submission reports all failing fields at once.

use super::{char_len, string_or_empty, valid_email, FieldErrors, Violation};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;

pub const USERNAME: &str = "username";
pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const BIRTH_DATE: &str = "birthDate";
pub const BIO: &str = "bio";

pub const MIN_USERNAME_LEN: usize = 6;
pub const MAX_BIO_LEN: usize = 160;
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub phone: String,
    /// `YYYY-MM-DD`, empty when not set.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileViolation {
    ShortUsername,
    MissingFullName,
    InvalidEmail,
    InvalidPhone,
    InvalidBirthDate,
    FutureBirthDate,
    LongBio,
}

impl Violation for ProfileViolation {
    fn field(&self) -> &'static str {
        match self {
            Self::ShortUsername => USERNAME,
            Self::MissingFullName => FULL_NAME,
            Self::InvalidEmail => EMAIL,
            Self::InvalidPhone => PHONE,
            Self::InvalidBirthDate | Self::FutureBirthDate => BIRTH_DATE,
            Self::LongBio => BIO,
        }
    }

    fn field_message(&self) -> &'static str {
        match self {
            Self::ShortUsername => "Username must be at least 6 characters",
            Self::MissingFullName => "Full name is required",
            Self::InvalidEmail => "Must be a valid email format",
            Self::InvalidPhone => "Phone must be 10-15 digits",
            Self::InvalidBirthDate => "Birth date must be a valid date",
            Self::FutureBirthDate => "Birth date cannot be in the future",
            Self::LongBio => "Bio must be 160 characters or less",
        }
    }
}

static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").ok());

pub fn valid_phone(phone: &str) -> bool {
    PHONE_RE.as_ref().is_some_and(|re| re.is_match(phone))
}

impl ProfileUpdate {
    /// All profile rules in field order, relative to `today`.
    pub fn violations_at(&self, today: NaiveDate) -> Vec<ProfileViolation> {
        let mut violations = Vec::new();

        if char_len(self.username.trim()) < MIN_USERNAME_LEN {
            violations.push(ProfileViolation::ShortUsername);
        }

        if self.full_name.trim().is_empty() {
            violations.push(ProfileViolation::MissingFullName);
        }

        if !valid_email(self.email.trim()) {
            violations.push(ProfileViolation::InvalidEmail);
        }

        if !valid_phone(self.phone.trim()) {
            violations.push(ProfileViolation::InvalidPhone);
        }

        let birth_date = self.birth_date.trim();
        if !birth_date.is_empty() {
            match NaiveDate::parse_from_str(birth_date, BIRTH_DATE_FORMAT) {
                Ok(date) if date > today => violations.push(ProfileViolation::FutureBirthDate),
                Ok(_) => (),
                Err(_) => violations.push(ProfileViolation::InvalidBirthDate),
            }
        }

        if char_len(&self.bio) > MAX_BIO_LEN {
            violations.push(ProfileViolation::LongBio);
        }

        violations
    }

    pub fn field_errors_at(&self, today: NaiveDate) -> FieldErrors {
        super::field_errors(&self.violations_at(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_profile() -> ProfileUpdate {
        ProfileUpdate {
            username: "validuser".to_string(),
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "1234567890".to_string(),
            ..ProfileUpdate::default()
        }
    }

    #[test]
    fn empty_submission_reports_all_required_fields() {
        let errors = ProfileUpdate::default().field_errors_at(today());

        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(USERNAME),
            Some(&"Username must be at least 6 characters")
        );
        assert_eq!(errors.get(FULL_NAME), Some(&"Full name is required"));
        assert_eq!(errors.get(EMAIL), Some(&"Must be a valid email format"));
        assert_eq!(errors.get(PHONE), Some(&"Phone must be 10-15 digits"));
    }

    #[test]
    fn valid_profile_has_no_errors() {
        assert!(valid_profile().field_errors_at(today()).is_empty());
    }

    #[test]
    fn future_birth_date_is_rejected() {
        let next_year = today().checked_add_months(Months::new(12)).unwrap();
        let profile = ProfileUpdate {
            birth_date: next_year.format(BIRTH_DATE_FORMAT).to_string(),
            ..valid_profile()
        };

        assert_eq!(
            profile.field_errors_at(today()).get(BIRTH_DATE),
            Some(&"Birth date cannot be in the future")
        );
    }

    #[test]
    fn past_and_current_birth_dates_are_accepted() {
        for birth_date in ["1990-01-01", "2024-06-15"] {
            let profile = ProfileUpdate {
                birth_date: birth_date.to_string(),
                ..valid_profile()
            };
            assert!(profile.field_errors_at(today()).is_empty(), "{birth_date}");
        }
    }

    #[test]
    fn unparseable_birth_date_is_rejected() {
        let profile = ProfileUpdate {
            birth_date: "15/06/1990".to_string(),
            ..valid_profile()
        };
        assert_eq!(
            profile.violations_at(today()),
            vec![ProfileViolation::InvalidBirthDate]
        );
    }

    #[test]
    fn bio_limit_is_160_characters() {
        let profile = ProfileUpdate {
            bio: "a".repeat(161),
            ..valid_profile()
        };
        assert_eq!(
            profile.field_errors_at(today()).get(BIO),
            Some(&"Bio must be 160 characters or less")
        );

        let profile = ProfileUpdate {
            bio: "a".repeat(160),
            ..valid_profile()
        };
        assert!(profile.field_errors_at(today()).is_empty());

        let profile = ProfileUpdate {
            bio: "This is a valid bio that is within the 160 character limit.".to_string(),
            ..valid_profile()
        };
        assert!(profile.field_errors_at(today()).is_empty());
    }

    #[test]
    fn phone_digit_range() {
        assert!(!valid_phone("123456789"));
        assert!(valid_phone("1234567890"));
        assert!(valid_phone("123456789012345"));
        assert!(!valid_phone("1234567890123456"));
        assert!(!valid_phone("123-456-7890"));
        assert!(!valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn violations_follow_field_order() {
        let profile = ProfileUpdate {
            bio: "a".repeat(200),
            birth_date: "2999-01-01".to_string(),
            ..ProfileUpdate::default()
        };

        assert_eq!(
            profile.violations_at(today()),
            vec![
                ProfileViolation::ShortUsername,
                ProfileViolation::MissingFullName,
                ProfileViolation::InvalidEmail,
                ProfileViolation::InvalidPhone,
                ProfileViolation::FutureBirthDate,
                ProfileViolation::LongBio,
            ]
        );
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let profile: ProfileUpdate =
            serde_json::from_str(r#"{"username": "validuser", "fullName": "John Doe"}"#).unwrap();
        assert_eq!(profile.full_name, "John Doe");
        assert_eq!(profile.birth_date, "");
        assert_eq!(profile.bio, "");
    }
}
