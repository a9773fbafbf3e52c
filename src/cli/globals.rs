use secrecy::SecretString;

/// Default mock credential accepted as the current password.
pub const DEFAULT_MOCK_PASSWORD: &str = "currentpass";

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub mock_password: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(mock_password: &str) -> Self {
        Self {
            mock_password: SecretString::from(mock_password.to_string()),
        }
    }

    pub fn set_mock_password(&mut self, password: SecretString) {
        self.mock_password = password;
    }
}

impl Default for GlobalArgs {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_PASSWORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::default();
        assert_eq!(args.mock_password.expose_secret(), "currentpass");
        assert!(!format!("{args:?}").contains("currentpass"));
    }

    #[test]
    fn test_set_mock_password() {
        let mut args = GlobalArgs::new("first");
        args.set_mock_password(SecretString::from("second".to_string()));
        assert_eq!(args.mock_password.expose_secret(), "second");
    }
}
