pub mod server;
pub mod submit;

use anyhow::Result;

#[derive(Debug)]
pub enum Action {
    Server(server::Args),
    Submit(submit::Args),
}

impl Action {
    /// Run the selected action.
    /// # Errors
    /// Returns an error if the action fails
    pub async fn execute(self) -> Result<()> {
        match self {
            Self::Server(args) => server::execute(args).await,
            Self::Submit(args) => submit::execute(args).await,
        }
    }
}
