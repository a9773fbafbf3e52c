use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl ClientError {
    /// Text shown on the form after a failed submission.
    /// Server rejections carry their own message, anything else is a generic retry hint.
    #[must_use]
    pub fn form_message(&self) -> &str {
        match self {
            ClientError::Http { message, .. } if !message.is_empty() => message,
            _ => GENERIC_FAILURE,
        }
    }
}

pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

impl fmt::Display for ClientError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Config(message) => write!(formatter, "Config error: {message}"),
            ClientError::Network(message) => write!(formatter, "Network error: {message}"),
            ClientError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            ClientError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            ClientError::Parse(message) => write!(formatter, "Response error: {message}"),
            ClientError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_surface_the_server_message() {
        let err = ClientError::Http {
            status: 400,
            message: "Current password is incorrect".to_string(),
        };
        assert_eq!(err.form_message(), "Current password is incorrect");
        assert_eq!(
            err.to_string(),
            "Request failed (400): Current password is incorrect"
        );
    }

    #[test]
    fn transport_errors_use_the_generic_message() {
        for err in [
            ClientError::Network("connection refused".to_string()),
            ClientError::Timeout("Request timed out. Please try again.".to_string()),
            ClientError::Parse("bad json".to_string()),
            ClientError::Http {
                status: 502,
                message: String::new(),
            },
        ] {
            assert_eq!(err.form_message(), GENERIC_FAILURE, "{err}");
        }
    }
}
