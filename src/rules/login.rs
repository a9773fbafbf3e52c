use super::{char_len, string_or_empty, FieldErrors, Violation, MIN_PASSWORD_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

#[derive(ToSchema, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginViolation {
    MissingEmail,
    ShortPassword,
}

impl Violation for LoginViolation {
    fn field(&self) -> &'static str {
        match self {
            Self::MissingEmail => EMAIL,
            Self::ShortPassword => PASSWORD,
        }
    }

    fn field_message(&self) -> &'static str {
        match self {
            Self::MissingEmail => "Email is required.",
            Self::ShortPassword => "Password must be at least 6 characters.",
        }
    }
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// All login rules, email first.
    pub fn violations(&self) -> Vec<LoginViolation> {
        let mut violations = Vec::new();

        if self.email.trim().is_empty() {
            violations.push(LoginViolation::MissingEmail);
        }

        if char_len(&self.password) < MIN_PASSWORD_LEN {
            violations.push(LoginViolation::ShortPassword);
        }

        violations
    }

    pub fn field_errors(&self) -> FieldErrors {
        super::field_errors(&self.violations())
    }
}
