use crate::{
    api::handlers::{ok, parse_payload, ApiMessage, Rejection},
    cli::globals::GlobalArgs,
    rules::login::LoginRequest,
};
use axum::{body::Bytes, extract::Extension, response::IntoResponse};
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path= "/api/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful", body = ApiMessage, content_type = "application/json"),
        (status = 400, description = "Missing email or short password", body = ApiMessage),
        (status = 401, description = "Invalid credentials", body = ApiMessage),
        (status = 500, description = "Unparseable request body", body = ApiMessage),
    ),
    tag= "login"
)]
// axum handler for the login form
#[instrument(skip_all)]
pub async fn login(globals: Extension<GlobalArgs>, body: Bytes) -> impl IntoResponse {
    let user: LoginRequest = match parse_payload(&body) {
        Ok(user) => user,
        Err(rejection) => return rejection.into_response(),
    };

    debug!("user: {:?}", user);

    if let Some(rejection) = Rejection::from_violations(&user.violations()) {
        return rejection.into_response();
    }

    // mock credential, any email is accepted
    if user.password != globals.mock_password.expose_secret() {
        debug!("Unauthorized");

        return Rejection::Unauthorized("Invalid credentials").into_response();
    }

    debug!("Login successful");

    ok("Login successful")
}
