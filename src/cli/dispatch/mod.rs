use crate::{
    cli::{
        actions::{server, submit, Action},
        commands::DEFAULT_API_URL,
        globals::DEFAULT_MOCK_PASSWORD,
    },
    rules::{login::LoginRequest, password::PasswordChange, profile::ProfileUpdate},
};
use anyhow::Result;
use secrecy::SecretString;

fn string(matches: &clap::ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// Map CLI matches to an action.
///
/// # Errors
/// Returns an error if the subcommand is unknown.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_url = || {
        matches
            .get_one::<String>("api-url")
            .map_or_else(|| DEFAULT_API_URL.to_string(), String::to_string)
    };

    let form = match matches.subcommand() {
        None => {
            return Ok(Action::Server(server::Args {
                port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
                mock_password: SecretString::from(
                    matches
                        .get_one::<String>("mock-password")
                        .map_or_else(|| DEFAULT_MOCK_PASSWORD.to_string(), String::to_string),
                ),
            }));
        }

        Some(("login", sub_m)) => submit::FormInput::Login(LoginRequest {
            email: string(sub_m, "email"),
            password: string(sub_m, "password"),
        }),

        Some(("password", sub_m)) => submit::FormInput::Password(PasswordChange {
            current_password: string(sub_m, "current"),
            new_password: string(sub_m, "new"),
            confirm_password: string(sub_m, "confirm"),
        }),

        Some(("profile", sub_m)) => submit::FormInput::Profile(ProfileUpdate {
            username: string(sub_m, "username"),
            full_name: string(sub_m, "full-name"),
            email: string(sub_m, "email"),
            phone: string(sub_m, "phone"),
            birth_date: string(sub_m, "birth-date"),
            bio: string(sub_m, "bio"),
        }),

        Some((name, _)) => return Err(anyhow::anyhow!("unknown subcommand: {name}")),
    };

    Ok(Action::Submit(submit::Args {
        api_url: api_url(),
        form,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn no_subcommand_starts_the_server() {
        temp_env::with_vars(
            [("PORTAL_PORT", None::<&str>), ("PORTAL_MOCK_PASSWORD", None)],
            || {
                let matches = commands::new().get_matches_from(vec!["portal", "-p", "3000"]);

                match handler(&matches).unwrap() {
                    Action::Server(args) => {
                        assert_eq!(args.port, 3000);
                        assert_eq!(args.mock_password.expose_secret(), "currentpass");
                    }
                    action => panic!("unexpected action: {action:?}"),
                }
            },
        );
    }

    #[test]
    fn profile_subcommand_builds_the_update() {
        temp_env::with_vars([("PORTAL_API_URL", None::<&str>)], || {
            let matches = commands::new().get_matches_from(vec![
                "portal",
                "profile",
                "--username",
                "validuser",
                "--full-name",
                "John Doe",
                "--birth-date",
                "1990-01-01",
            ]);

            match handler(&matches).unwrap() {
                Action::Submit(submit::Args {
                    api_url,
                    form: submit::FormInput::Profile(update),
                }) => {
                    assert_eq!(api_url, DEFAULT_API_URL);
                    assert_eq!(update.username, "validuser");
                    assert_eq!(update.full_name, "John Doe");
                    assert_eq!(update.birth_date, "1990-01-01");
                    assert_eq!(update.email, "");
                }
                action => panic!("unexpected action: {action:?}"),
            }
        });
    }

    #[test]
    fn login_subcommand_builds_the_request() {
        let matches = commands::new().get_matches_from(vec![
            "portal",
            "login",
            "--email",
            "test@example.com",
            "--password",
            "password123",
            "--api-url",
            "http://localhost:3000",
        ]);

        match handler(&matches).unwrap() {
            Action::Submit(submit::Args {
                api_url,
                form: submit::FormInput::Login(login),
            }) => {
                assert_eq!(api_url, "http://localhost:3000");
                assert_eq!(login, LoginRequest::new("test@example.com", "password123"));
            }
            action => panic!("unexpected action: {action:?}"),
        }
    }
}
