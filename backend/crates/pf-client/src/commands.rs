use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and print the issued token
    Login {
        user_name: String,
        #[arg(long, env = "PF_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Fetch a public page by route, e.g. `/portfolio/my-work`
    Page { route: String },

    /// Fetch a user's private dashboard (needs a token)
    User { name: String },

    /// Check whether a name is free
    Check {
        /// user or portfolio
        page_type: String,
        name: String,
    },

    /// Delete a user, portfolio or project (by id) you own
    Delete {
        /// user, portfolio or project
        page_type: String,
        name: String,
        /// Acting user; must match the token
        #[arg(long)]
        user: String,
    },
}
