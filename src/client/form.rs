//! Form state for the login, password and profile pages.
//!
//! ```text
//! Idle -> Submitting -> Idle (field errors shown, can submit again)
//!                    -> AwaitingResponse -> Success (message shown, fields reset)
//!                                        -> Failure (message shown, fields kept)
//! ```
//!
//! A rejected submission leaves the errors in [`Form::errors`] and the state
//! back at `Idle`; [`Form::is_invalid`] tells the two idle cases apart.
//!
//! A submit while `AwaitingResponse` is ignored, so a double click never sends
//! a second request.

use super::{api::ApiClient, errors::ClientError};
use crate::{
    api::ApiMessage,
    client::api::{LOGIN_PATH, PASSWORD_PATH, PROFILE_PATH},
    rules::{
        login::LoginRequest, password::PasswordChange, profile::ProfileUpdate, today, FieldErrors,
    },
};
use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    AwaitingResponse,
    Success(String),
    Failure(String),
}

/// A form model that is validated locally and then sent as the request body.
pub trait FormModel: Default + Clone + Serialize {
    const METHOD: Method;
    const PATH: &'static str;

    fn field_errors_at(&self, today: NaiveDate) -> FieldErrors;
}

impl FormModel for LoginRequest {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = LOGIN_PATH;

    fn field_errors_at(&self, _today: NaiveDate) -> FieldErrors {
        self.field_errors()
    }
}

impl FormModel for PasswordChange {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = PASSWORD_PATH;

    fn field_errors_at(&self, _today: NaiveDate) -> FieldErrors {
        self.field_errors()
    }
}

impl FormModel for ProfileUpdate {
    const METHOD: Method = Method::PUT;
    const PATH: &'static str = PROFILE_PATH;

    fn field_errors_at(&self, today: NaiveDate) -> FieldErrors {
        ProfileUpdate::field_errors_at(self, today)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Form<M: FormModel> {
    model: M,
    errors: FieldErrors,
    state: FormState,
}

impl<M: FormModel> Form<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_model(model: M) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field).copied()
    }

    /// Success or failure text, if the last submission finished.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            FormState::Success(message) | FormState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Idle with field errors from the last submission.
    pub fn is_invalid(&self) -> bool {
        self.state == FormState::Idle && !self.errors.is_empty()
    }

    /// The submit button is disabled while a request is in flight.
    pub fn is_submit_disabled(&self) -> bool {
        self.state == FormState::AwaitingResponse
    }

    /// Change the model and clear the error shown for `field`.
    pub fn edit(&mut self, field: &str, apply: impl FnOnce(&mut M)) {
        apply(&mut self.model);
        self.errors.remove(field);
    }

    /// Validate against `today` and return the request to send, if any.
    ///
    /// Returns `None` when the form is invalid (see [`Form::errors`]) or a
    /// request is already in flight.
    pub fn begin_submit_at(&mut self, today: NaiveDate) -> Option<M> {
        if self.is_submit_disabled() {
            debug!("submission already in flight, ignored");
            return None;
        }

        self.state = FormState::Submitting;
        self.errors = self.model.field_errors_at(today);

        if !self.errors.is_empty() {
            debug!("form has {} invalid field(s)", self.errors.len());
            self.state = FormState::Idle;
            return None;
        }

        self.state = FormState::AwaitingResponse;
        Some(self.model.clone())
    }

    pub fn begin_submit(&mut self) -> Option<M> {
        self.begin_submit_at(today())
    }

    /// Apply the API outcome of the request returned by `begin_submit`.
    pub fn finish(&mut self, result: Result<ApiMessage, ClientError>) {
        if self.state != FormState::AwaitingResponse {
            debug!("no submission in flight, response dropped");
            return;
        }

        match result {
            Ok(response) => {
                self.model = M::default();
                self.errors.clear();
                self.state = FormState::Success(response.message);
            }
            Err(err) => {
                debug!("submission failed: {}", err);
                self.state = FormState::Failure(err.form_message().to_string());
            }
        }
    }

    /// Validate, send and record the outcome.
    pub async fn submit(&mut self, client: &ApiClient) -> &FormState {
        let Some(request) = self.begin_submit() else {
            return &self.state;
        };

        let result = client.send_json(M::METHOD, M::PATH, &request).await;
        self.finish(result);

        &self.state
    }
}
