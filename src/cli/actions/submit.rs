use crate::{
    client::{ApiClient, Form, FormModel, FormState},
    rules::{login::LoginRequest, password::PasswordChange, profile::ProfileUpdate},
};
use anyhow::{anyhow, Result};
use tracing::debug;

#[derive(Debug)]
pub enum FormInput {
    Login(LoginRequest),
    Password(PasswordChange),
    Profile(ProfileUpdate),
}

#[derive(Debug)]
pub struct Args {
    pub api_url: String,
    pub form: FormInput,
}

/// Execute one form submission against a running server.
/// # Errors
/// Returns an error if the form is invalid or the server rejects it
pub async fn execute(args: Args) -> Result<()> {
    let client = ApiClient::new(&args.api_url)?;

    debug!("submitting to {}", args.api_url);

    match args.form {
        FormInput::Login(model) => run(&client, model).await,
        FormInput::Password(model) => run(&client, model).await,
        FormInput::Profile(model) => run(&client, model).await,
    }
}

async fn run<M: FormModel>(client: &ApiClient, model: M) -> Result<()> {
    let mut form = Form::with_model(model);

    let state = form.submit(client).await.clone();

    match state {
        FormState::Success(message) => {
            println!("{message}");
            Ok(())
        }
        FormState::Failure(message) => Err(anyhow!("{message}")),
        FormState::Idle if form.is_invalid() => {
            for (field, message) in form.errors() {
                eprintln!("{field}: {message}");
            }
            Err(anyhow!("form has invalid fields"))
        }
        state => Err(anyhow!("unexpected form state: {state:?}")),
    }
}
