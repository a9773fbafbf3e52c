//! Client side of the account forms: local validation, the form state machine
//! and the HTTP calls to the account endpoints.

pub mod api;
pub mod errors;
pub mod form;

pub use api::ApiClient;
pub use errors::ClientError;
pub use form::{Form, FormModel, FormState};
