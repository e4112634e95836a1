//! pf - portfolio host CLI
//!
//! Drives the client store headlessly.
//!
//! # Examples
//!
//! ```bash
//! # Log in and keep the token
//! export PF_TOKEN=$(pf login alice --password secret | jq -r .token)
//!
//! # Is a portfolio name free?
//! pf check portfolio my-work
//!
//! # Read a public portfolio page
//! pf page /portfolio/my-work --pretty
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use pf_client::{Client, Store};
use pf_core::{Credentials, PageType};

use std::process::ExitCode;

use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = Client::new(&cli.server, cli.token.as_deref());
    let mut store = Store::new(client);

    let result = run(cli.command, &mut store).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, store: &mut Store) -> Result<Value, String> {
    match command {
        Commands::Login {
            user_name,
            password,
        } => {
            let credentials = Credentials {
                user_name,
                password,
            };
            if store.auth_user(credentials).await.map_err(|e| e.to_string())? {
                Ok(json!({
                    "userName": store.state().user(),
                    "token": store.state().token(),
                }))
            } else {
                Err(store.state().error.clone())
            }
        }

        Commands::Page { route } => {
            if store.get_portfolio_json(&route).await {
                Ok(store.state().page_info().clone())
            } else {
                Err(store.state().error.clone())
            }
        }

        Commands::User { name } => {
            if store.get_user_page(&name).await {
                Ok(store.state().page_info().clone())
            } else {
                Err(store.state().error.clone())
            }
        }

        Commands::Check { page_type, name } => {
            let page_type: PageType = page_type.parse().map_err(|e| format!("{}", e))?;
            let available = store
                .check_name_available(&name, page_type)
                .await
                .map_err(|e| e.to_string())?;
            Ok(json!({ "name": name, "available": available }))
        }

        Commands::Delete {
            page_type,
            name,
            user,
        } => {
            let page_type: PageType = page_type.parse().map_err(|e| format!("{}", e))?;
            store.set_user_name(user);
            store
                .delete_element(&name, page_type)
                .await
                .map_err(|e| e.to_string())?;
            Ok(json!({ "deleted": name, "pageType": page_type }))
        }
    }
}
