use crate::access_layer::{from_row, id_of};
use crate::{AccessError, AccessLayer, Result as AccessErrorResult};

use pf_core::{
    PortfolioHeader, PortfolioPage, PortfolioSummary, ProjectEntry, PublicProfile, UserPage,
};
use pf_db::{Filter, JoinSide, Table};

use log::debug;
use serde::Deserialize;

const PRIVATE_PROFILE_COLUMNS: &[&str] = &[
    "id",
    "username",
    "email",
    "userimage",
    "location",
    "firstname",
    "lastname",
    "linkedin",
    "usergithuburl",
    "userbio",
];

const PUBLIC_PROFILE_COLUMNS: &[&str] = &[
    "username",
    "email",
    "userimage",
    "location",
    "usergithuburl",
    "linkedin",
    "firstname",
    "lastname",
    "userbio",
];

const PORTFOLIO_SUMMARY_COLUMNS: &[&str] = &["id", "description", "name", "template"];

const PORTFOLIO_HEADER_COLUMNS: &[&str] = &[
    "id",
    "name",
    "usersid",
    "description",
    "technologies",
    "config",
    "template",
    "public",
];

const JOINED_PORTFOLIO_COLUMNS: &[&str] = &["config", "name", "public", "template"];

const JOINED_PROJECT_COLUMNS: &[&str] = &[
    "id",
    "imageurl",
    "githuburl",
    "description",
    "liveurl",
    "projectname",
];

#[derive(Deserialize)]
struct PrivateProfile {
    id: i64,
    username: String,
    email: Option<String>,
    userimage: Option<String>,
    location: Option<String>,
    firstname: Option<String>,
    lastname: Option<String>,
    linkedin: Option<String>,
    usergithuburl: Option<String>,
    userbio: Option<String>,
}

impl AccessLayer {
    /// Private dashboard for `name`. The token must belong to that user.
    pub async fn user_page(&self, name: &str, token: &str) -> AccessErrorResult<UserPage> {
        let id = self.get_user_id(name).await?;
        self.verify_token(name, token)?;

        let (profile_rows, portfolio_rows) = tokio::try_join!(
            self.store.select_some_where(
                Table::Users,
                Filter::eq("id", id),
                PRIVATE_PROFILE_COLUMNS
            ),
            self.store.select_some_where(
                Table::Portfolios,
                Filter::eq("usersid", id),
                PORTFOLIO_SUMMARY_COLUMNS
            ),
        )?;

        // Deleted between the id lookup and the fetch
        let profile_row = profile_rows
            .into_iter()
            .next()
            .ok_or_else(|| AccessError::not_found(format!("No such user '{}' found.", name)))?;
        let profile: PrivateProfile = from_row(profile_row)?;

        let user_portfolios = portfolio_rows
            .into_iter()
            .map(from_row::<PortfolioSummary>)
            .collect::<AccessErrorResult<Vec<_>>>()?;

        debug!(
            "Loaded user page for '{}' with {} portfolio(s)",
            name,
            user_portfolios.len()
        );

        Ok(UserPage {
            user_name: profile.username,
            user_id: profile.id,
            user_email: profile.email,
            user_location: profile.location,
            user_image: profile.userimage,
            firstname: profile.firstname,
            lastname: profile.lastname,
            linkedin: profile.linkedin,
            githuburl: profile.usergithuburl,
            user_portfolios,
            user_bio: profile.userbio,
        })
    }

    /// Public page for the named portfolio: its header, its projects and the
    /// owner's public profile. A portfolio without projects still renders.
    pub async fn portfolio_page(&self, name: &str) -> AccessErrorResult<PortfolioPage> {
        let header_row = self
            .find_one(
                Table::Portfolios,
                Filter::eq("name", name),
                PORTFOLIO_HEADER_COLUMNS,
            )
            .await?
            .ok_or_else(|| {
                AccessError::not_found(format!("No such portfolio '{}' found.", name))
            })?;
        let usersid = id_of(&header_row, "usersid")?;
        let portfolio: PortfolioHeader = from_row(header_row)?;

        let (project_rows, owner_rows) = tokio::try_join!(
            self.store.select_some_join(
                JoinSide::new(Table::Portfolios, JOINED_PORTFOLIO_COLUMNS, "id"),
                JoinSide::new(Table::Projects, JOINED_PROJECT_COLUMNS, "portfolioid"),
                Filter::eq("id", portfolio.id),
            ),
            self.store.select_some_where(
                Table::Users,
                Filter::eq("id", usersid),
                PUBLIC_PROFILE_COLUMNS
            ),
        )?;

        let user_info: PublicProfile = match owner_rows.into_iter().next() {
            Some(row) => from_row(row)?,
            None => {
                return Err(AccessError::not_found(format!(
                    "Owner of portfolio '{}' not found.",
                    name
                )));
            }
        };

        let portfolio_info = project_rows
            .into_iter()
            .map(|mut row| {
                row.insert(
                    "portfolioDescription".to_string(),
                    portfolio.description.clone().into(),
                );
                row.insert("usersid".to_string(), usersid.into());
                from_row::<ProjectEntry>(row)
            })
            .collect::<AccessErrorResult<Vec<_>>>()?;

        Ok(PortfolioPage {
            portfolio,
            user_info,
            portfolio_info,
        })
    }
}
