use crate::access_layer::id_of;
use crate::{AccessError, AccessLayer, Result as AccessErrorResult};

use pf_core::{AuthResponse, Credentials};
use pf_db::{Filter, Table};

use log::{info, warn};
use serde_json::Value;

impl AccessLayer {
    /// True when no user has claimed `name`
    pub async fn check_user_name(&self, name: &str) -> AccessErrorResult<bool> {
        let row = self
            .find_one(Table::Users, Filter::eq("username", name), &["username"])
            .await?;
        Ok(row.is_none())
    }

    /// True when no portfolio has claimed `name`
    pub async fn check_portfolio_name(&self, name: &str) -> AccessErrorResult<bool> {
        let row = self
            .find_one(Table::Portfolios, Filter::eq("name", name), &["name"])
            .await?;
        Ok(row.is_none())
    }

    pub async fn get_user_id(&self, name: &str) -> AccessErrorResult<i64> {
        let row = self
            .find_one(Table::Users, Filter::eq("username", name), &["id"])
            .await?
            .ok_or_else(|| AccessError::not_found(format!("No such user '{}' found.", name)))?;
        id_of(&row, "id")
    }

    /// Id and owner id of the named portfolio
    pub async fn get_portfolio_ids(&self, name: &str) -> AccessErrorResult<(i64, i64)> {
        let row = self
            .find_one(
                Table::Portfolios,
                Filter::eq("name", name),
                &["id", "usersid"],
            )
            .await?
            .ok_or_else(|| {
                AccessError::not_found(format!("No such portfolio '{}' found.", name))
            })?;
        Ok((id_of(&row, "id")?, id_of(&row, "usersid")?))
    }

    /// Log a user in.
    ///
    /// A missing user or wrong password is an `Ok` response with
    /// `auth: false`; only store and hashing failures are errors.
    pub async fn auth_user(&self, credentials: Credentials) -> AccessErrorResult<AuthResponse> {
        let Credentials {
            user_name,
            password,
        } = credentials;

        let Some(row) = self
            .find_one(
                Table::Users,
                Filter::eq("username", user_name.as_str()),
                &["id", "pw"],
            )
            .await?
        else {
            warn!("Login attempt for unknown user '{}'", user_name);
            return Ok(AuthResponse::unknown_user(&user_name));
        };

        let usersid = id_of(&row, "id")?;
        let stored_hash = row
            .get("pw")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        if !self.verify_password(password, stored_hash).await? {
            warn!("Wrong password for user '{}'", user_name);
            return Ok(AuthResponse::wrong_password());
        }

        let token = self.tokens.issue(&user_name)?;
        info!("User '{}' logged in", user_name);

        Ok(AuthResponse::granted(user_name, usersid, token))
    }
}
