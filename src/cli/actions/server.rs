use crate::{api, cli::globals::GlobalArgs};
use anyhow::Result;
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub mock_password: SecretString,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to start
pub async fn execute(args: Args) -> Result<()> {
    let mut globals = GlobalArgs::default();
    globals.set_mock_password(args.mock_password);

    debug!("starting server on port {}", args.port);

    api::new(args.port, &globals).await
}
