use crate::{
    api::handlers::{ok, parse_payload, ApiMessage, Rejection},
    cli::globals::GlobalArgs,
    rules::{password::PasswordChange, Violation},
};
use axum::{body::Bytes, extract::Extension, response::IntoResponse};
use secrecy::ExposeSecret;
use tracing::{debug, info, instrument};

#[utoipa::path(
    post,
    path= "/api/password",
    request_body = PasswordChange,
    responses (
        (status = 200, description = "Password updated successfully", body = ApiMessage, content_type = "application/json"),
        (status = 400, description = "Missing fields, mismatch, too short or wrong current password", body = ApiMessage),
        (status = 500, description = "Unparseable request body", body = ApiMessage),
    ),
    tag= "password"
)]
// axum handler for the password change form
#[instrument(skip_all)]
pub async fn password(globals: Extension<GlobalArgs>, body: Bytes) -> impl IntoResponse {
    let change: PasswordChange = match parse_payload(&body) {
        Ok(change) => change,
        Err(rejection) => return rejection.into_response(),
    };

    if let Err(violation) = change.verify(globals.mock_password.expose_secret()) {
        debug!(field = violation.field(), "{}", violation.message());

        return Rejection::invalid(violation.message()).into_response();
    }

    // nothing is stored, the update is simulated
    info!("Password updated successfully for user");

    ok("Password updated successfully")
}
