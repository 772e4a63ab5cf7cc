//! CLI commands

use anyhow::{Result, anyhow, bail};
use bookshelf_core::{
    FileTokenStore, LoginForm, LoginOutcome, Navigator, Route, SharedTokenStore, TokenStore,
    logout,
};
use bookshelf_http::ApiClient;
use clap::Subcommand;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::ClientSettings;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long, env = "BOOKSHELF_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Print the stored session token
    Token,

    /// Send an authenticated GET and print the JSON response
    Get {
        /// Path relative to the API base URL, e.g. /books
        path: String,
    },
}

/// Stands in for page navigation: reports where the session moved to
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        debug!(%route, "Navigation requested");
        match route {
            Route::Books => println!("Logged in."),
            Route::Login => println!("Logged out."),
            Route::Register => println!("Register an account through the web client."),
        }
    }
}

/// One error carrying every message of a failed login
fn login_error(errors: &[String]) -> anyhow::Error {
    if errors.is_empty() {
        anyhow!("login failed")
    } else {
        anyhow!("login failed: {}", errors.join("; "))
    }
}

fn open_store(settings: &ClientSettings) -> Result<SharedTokenStore> {
    let store = FileTokenStore::in_dir(settings.resolve_data_dir()?)?;
    debug!(path = %store.path().display(), "Using token file");
    Ok(Arc::new(store))
}

fn build_client(settings: &ClientSettings, store: SharedTokenStore) -> Result<ApiClient> {
    let mut builder = ApiClient::builder()
        .base_url(&settings.base_url)
        .token_store(store);
    if let Some(timeout) = settings.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

impl Commands {
    pub async fn execute(self, settings: &ClientSettings) -> Result<()> {
        let store = open_store(settings)?;
        let navigator = ConsoleNavigator;

        match self {
            Self::Login { email, password } => {
                let client = build_client(settings, store.clone())?;
                let mut form = LoginForm::with_credentials(email, password);
                info!(base_url = %client.base_url(), "Authenticating");

                if form.login(&client, store.as_ref(), &navigator).await == LoginOutcome::Failed {
                    return Err(login_error(form.errors()));
                }
            }
            Self::Logout => logout(store.as_ref(), &navigator),
            Self::Token => match store.active_token() {
                Some(token) => println!("{token}"),
                None => bail!("not logged in"),
            },
            Self::Get { path } => {
                if !store.is_authenticated() {
                    info!("No session token; sending request unauthenticated");
                }
                let client = build_client(settings, store)?;
                let body = client.get_json(&path).await?;
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
        }

        Ok(())
    }
}
