use crate::{
    api::handlers::{ok, parse_payload, ApiMessage, Rejection},
    rules::{profile::ProfileUpdate, today},
};
use axum::{body::Bytes, response::IntoResponse};
use tracing::{debug, info, instrument};

#[utoipa::path(
    put,
    path= "/api/profile",
    request_body = ProfileUpdate,
    responses (
        (status = 200, description = "Profile updated successfully", body = ApiMessage, content_type = "application/json"),
        (status = 400, description = "One or more fields are invalid", body = ApiMessage),
        (status = 500, description = "Unparseable request body", body = ApiMessage),
    ),
    tag= "profile"
)]
// axum handler for the profile form
#[instrument(skip_all)]
pub async fn profile(body: Bytes) -> impl IntoResponse {
    let update: ProfileUpdate = match parse_payload(&body) {
        Ok(update) => update,
        Err(rejection) => return rejection.into_response(),
    };

    let violations = update.violations_at(today());
    if let Some(rejection) = Rejection::from_violations(&violations) {
        debug!("profile rejected: {} field(s)", violations.len());

        return rejection.into_response();
    }

    info!(username = %update.username, "Profile updated successfully");

    ok("Profile updated successfully")
}
