//! Password change rules.
//!
//! Rules run in a fixed order and stop at the first failure: required fields,
//! then new/confirm equality, then minimum length. The current password check
//! only exists on the server and runs last.

use super::{char_len, string_or_empty, FieldErrors, Violation, MIN_PASSWORD_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub const CURRENT_PASSWORD: &str = "currentPassword";
pub const NEW_PASSWORD: &str = "newPassword";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

#[derive(ToSchema, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub current_password: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub new_password: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub confirm_password: String,
}

// never print the values
impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("current_password", &"***")
            .field("new_password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordViolation {
    MissingCurrent,
    MissingNew,
    MissingConfirm,
    Mismatch,
    TooShort,
    IncorrectCurrent,
}

impl PasswordViolation {
    /// Message returned by the API.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingCurrent | Self::MissingNew | Self::MissingConfirm => {
                "All fields are required"
            }
            Self::Mismatch => "New passwords do not match",
            Self::TooShort => "Password must be at least 6 characters",
            Self::IncorrectCurrent => "Current password is incorrect",
        }
    }
}

impl Violation for PasswordViolation {
    fn field(&self) -> &'static str {
        match self {
            Self::MissingCurrent | Self::IncorrectCurrent => CURRENT_PASSWORD,
            Self::MissingNew | Self::TooShort => NEW_PASSWORD,
            Self::MissingConfirm | Self::Mismatch => CONFIRM_PASSWORD,
        }
    }

    fn field_message(&self) -> &'static str {
        match self {
            Self::MissingCurrent => "Current password is required",
            Self::MissingNew => "New password is required",
            Self::MissingConfirm => "Please confirm your new password",
            Self::Mismatch => "Passwords do not match",
            Self::TooShort => "Password must be at least 6 characters",
            Self::IncorrectCurrent => "Current password is incorrect",
        }
    }
}

impl PasswordChange {
    pub fn new(current: &str, new: &str, confirm: &str) -> Self {
        Self {
            current_password: current.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    /// Shape rules, first failure wins.
    ///
    /// # Errors
    /// Returns the first rule that does not hold.
    pub fn check(&self) -> Result<(), PasswordViolation> {
        if self.current_password.is_empty() {
            return Err(PasswordViolation::MissingCurrent);
        }

        if self.new_password.is_empty() {
            return Err(PasswordViolation::MissingNew);
        }

        if self.confirm_password.is_empty() {
            return Err(PasswordViolation::MissingConfirm);
        }

        if self.new_password != self.confirm_password {
            return Err(PasswordViolation::Mismatch);
        }

        if char_len(&self.new_password) < MIN_PASSWORD_LEN {
            return Err(PasswordViolation::TooShort);
        }

        Ok(())
    }

    /// Shape rules followed by the credential check against `expected`.
    ///
    /// # Errors
    /// Returns the first rule that does not hold.
    pub fn verify(&self, expected: &str) -> Result<(), PasswordViolation> {
        self.check()?;

        if self.current_password != expected {
            return Err(PasswordViolation::IncorrectCurrent);
        }

        Ok(())
    }

    /// Client-side errors: at most one entry.
    pub fn field_errors(&self) -> FieldErrors {
        match self.check() {
            Ok(()) => FieldErrors::new(),
            Err(violation) => super::field_errors(&[violation]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK: &str = "currentpass";

    #[test]
    fn every_missing_combination_is_all_fields_required() {
        for mask in 0..7u8 {
            let pick = |bit: u8, value: &str| {
                if mask & bit == 0 {
                    String::new()
                } else {
                    value.to_string()
                }
            };
            let change = PasswordChange {
                current_password: pick(1, MOCK),
                new_password: pick(2, "newpass123"),
                confirm_password: pick(4, "newpass123"),
            };

            let violation = change.verify(MOCK).unwrap_err();
            assert_eq!(violation.message(), "All fields are required", "mask {mask}");
        }
    }

    #[test]
    fn mismatch_is_checked_before_length() {
        let change = PasswordChange::new(MOCK, "123", "456");
        assert_eq!(change.check(), Err(PasswordViolation::Mismatch));
        assert_eq!(
            PasswordViolation::Mismatch.message(),
            "New passwords do not match"
        );
    }

    #[test]
    fn short_matching_passwords_are_too_short() {
        for len in 1..MIN_PASSWORD_LEN {
            let value = "x".repeat(len);
            let change = PasswordChange::new(MOCK, &value, &value);
            assert_eq!(change.check(), Err(PasswordViolation::TooShort), "len {len}");
        }

        let change = PasswordChange::new(MOCK, "sixsix", "sixsix");
        assert_eq!(change.check(), Ok(()));
    }

    #[test]
    fn wrong_current_password_is_rejected_last() {
        let change = PasswordChange::new("wrongpass", "newpass123", "newpass123");
        assert_eq!(change.check(), Ok(()));
        assert_eq!(
            change.verify(MOCK),
            Err(PasswordViolation::IncorrectCurrent)
        );

        // shape errors win over the credential check
        let change = PasswordChange::new("wrongpass", "123", "123");
        assert_eq!(change.verify(MOCK), Err(PasswordViolation::TooShort));
    }

    #[test]
    fn well_formed_change_verifies() {
        let change = PasswordChange::new(MOCK, "newpass123", "newpass123");
        assert_eq!(change.verify(MOCK), Ok(()));
        assert!(change.field_errors().is_empty());
    }

    #[test]
    fn field_errors_stop_at_first_rule() {
        let errors = PasswordChange::default().field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(CURRENT_PASSWORD),
            Some(&"Current password is required")
        );

        let errors = PasswordChange::new(MOCK, "newpassword123", "differentpassword").field_errors();
        assert_eq!(errors.get(CONFIRM_PASSWORD), Some(&"Passwords do not match"));

        let errors = PasswordChange::new(MOCK, "123", "123").field_errors();
        assert_eq!(
            errors.get(NEW_PASSWORD),
            Some(&"Password must be at least 6 characters")
        );
    }

    #[test]
    fn null_and_missing_fields_deserialize_as_empty() {
        let change: PasswordChange =
            serde_json::from_str(r#"{"currentPassword": null, "newPassword": "abc"}"#).unwrap();
        assert_eq!(change.current_password, "");
        assert_eq!(change.new_password, "abc");
        assert_eq!(change.confirm_password, "");
    }

    #[test]
    fn serializes_camel_case_and_hides_debug() {
        let change = PasswordChange::new(MOCK, "newpass123", "newpass123");
        let value = serde_json::to_value(&change).unwrap();
        assert_eq!(value["currentPassword"], MOCK);
        assert_eq!(value["confirmPassword"], "newpass123");
        assert!(!format!("{change:?}").contains(MOCK));
    }
}
