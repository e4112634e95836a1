use crate::commands::Commands;

use clap::Parser;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

#[derive(Parser)]
#[command(name = "pf")]
#[command(about = "Portfolio host command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(long, global = true, env = "PF_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub(crate) server: String,

    /// Bearer token from a previous `pf login`
    #[arg(long, global = true, env = "PF_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
