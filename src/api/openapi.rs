#![allow(clippy::needless_for_each)]

use crate::{
    api::handlers::{self, health::Health, ApiMessage},
    rules::{login::LoginRequest, password::PasswordChange, profile::ProfileUpdate},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::login::login,
        handlers::password::password,
        handlers::profile::profile
    ),
    components(schemas(Health, ApiMessage, LoginRequest, PasswordChange, ProfileUpdate)),
    tags(
        (name = "portal", description = "Account pages API")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
