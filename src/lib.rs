//! # Portal (account pages API)
//!
//! `portal` serves the mock endpoints behind the login, profile and password
//! change pages, and ships the client side of those forms.
//!
//! ## Shared rules
//!
//! [`rules`] holds one request type per form together with its validation
//! rules. The [`client`] runs them before sending anything, and the [`api`]
//! handlers run them again on the received payload, so both sides report the
//! same fields in the same order.
//!
//! - **Password change:** short-circuits on the first failing rule (required,
//!   match, length), then checks the current password against the mock
//!   credential.
//! - **Profile:** evaluates every rule and reports all failing fields.
//! - **Login:** email required and minimum password length, both reported.
//!
//! ## No persistence
//!
//! Nothing is stored. The current password and the login password are checked
//! against a single mock credential (`currentpass` unless configured), and a
//! successful update only produces a log line.

pub mod api;
pub mod cli;
pub mod client;
pub mod rules;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
