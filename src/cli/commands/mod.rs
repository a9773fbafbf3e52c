use crate::cli::globals::DEFAULT_MOCK_PASSWORD;
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

fn field(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).default_value("")
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("portal")
        .about("Account pages API: login, profile and password forms")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("PORTAL_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("mock-password")
                .long("mock-password")
                .help("Password accepted as the current password and for login")
                .default_value(DEFAULT_MOCK_PASSWORD)
                .env("PORTAL_MOCK_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Base URL of a running portal server, used by the form subcommands")
                .default_value(DEFAULT_API_URL)
                .env("PORTAL_API_URL")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("PORTAL_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("login")
                .about("Submit the login form")
                .arg(field("email", "Email address"))
                .arg(field("password", "Password")),
        )
        .subcommand(
            Command::new("password")
                .about("Submit the password change form")
                .arg(field("current", "Current password"))
                .arg(field("new", "New password"))
                .arg(field("confirm", "Confirm new password")),
        )
        .subcommand(
            Command::new("profile")
                .about("Submit the profile form")
                .arg(field("username", "Username, at least 6 characters"))
                .arg(field("full-name", "Full name"))
                .arg(field("email", "Email address"))
                .arg(field("phone", "Phone number, 10-15 digits"))
                .arg(field("birth-date", "Birth date, YYYY-MM-DD"))
                .arg(field("bio", "Bio, up to 160 characters")),
        )
}
