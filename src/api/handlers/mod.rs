pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod password;
pub use self::password::password;

pub mod profile;
pub use self::profile::profile;


// common types for the handlers
use crate::rules::{field_errors, FieldErrors, Violation};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, error};
use utoipa::ToSchema;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Body of every API response.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiMessage {
    pub message: String,
    /// Field name to message, only present on rejected form submissions.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_errors(mut self, errors: &FieldErrors) -> Self {
        self.errors = errors
            .iter()
            .map(|(field, message)| ((*field).to_string(), (*message).to_string()))
            .collect();
        self
    }
}

/// Reply with `200 OK` and a message.
pub fn ok(message: &str) -> Response {
    (StatusCode::OK, Json(ApiMessage::new(message))).into_response()
}

/// Reasons a request is turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// 400, with the offending fields when the form has several.
    Invalid {
        message: &'static str,
        errors: FieldErrors,
    },
    /// 401
    Unauthorized(&'static str),
    /// 500, the message never carries details.
    Internal,
}

impl Rejection {
    pub fn invalid(message: &'static str) -> Self {
        Self::Invalid {
            message,
            errors: FieldErrors::new(),
        }
    }

    /// First violation becomes the message, all of them go in `errors`.
    /// Returns `None` when there is nothing to reject.
    pub fn from_violations<V: Violation>(violations: &[V]) -> Option<Self> {
        let first = violations.first()?;

        Some(Self::Invalid {
            message: first.field_message(),
            errors: field_errors(violations),
        })
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::Invalid { message, errors } => ApiMessage::new(message).with_errors(&errors),
            Self::Unauthorized(message) => ApiMessage::new(message),
            Self::Internal => ApiMessage::new(INTERNAL_SERVER_ERROR),
        };

        (status, Json(body)).into_response()
    }
}

/// Decode a JSON request body.
///
/// Any JSON value other than `null` is accepted. A body that is not an object
/// carries no fields, so every field is read as missing.
///
/// # Errors
/// Returns `Rejection::Internal` if the body is not JSON or is `null`.
pub fn parse_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, Rejection> {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => {
            error!("Error parsing request body: null payload");
            return Err(Rejection::Internal);
        }
        Ok(Value::Object(fields)) => Value::Object(fields),
        Ok(_) => {
            debug!("non-object payload, no fields read");
            Value::Object(Map::new())
        }
        Err(err) => {
            error!("Error parsing request body: {}", err);
            return Err(Rejection::Internal);
        }
    };

    serde_json::from_value(value).map_err(|err| {
        error!("Error decoding request body: {}", err);

        Rejection::Internal
    })
}


// axum fallback for unknown routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ApiMessage::new("Not found")))
}
