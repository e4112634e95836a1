use crate::access_layer::ensure_affected;
use crate::{AccessError, AccessLayer, Result as AccessErrorResult};

use pf_core::{NewPortfolio, PortfolioUpdate, validate_portfolio_name};
use pf_db::{Filter, SqlValue, Table};

use log::info;
use serde_json::Value;

impl AccessLayer {
    /// Create a portfolio owned by `user_name`. Returns the new portfolio id.
    pub async fn add_new_portfolio(
        &self,
        user_name: &str,
        portfolio: NewPortfolio,
        token: &str,
    ) -> AccessErrorResult<i64> {
        self.verify_token(user_name, token)?;
        validate_portfolio_name(&portfolio.portfolio_name)?;

        let usersid = self.get_user_id(user_name).await?;

        let outcome = self
            .store
            .insert_one(
                Table::Portfolios,
                &[
                    "name",
                    "usersid",
                    "description",
                    "technologies",
                    "config",
                    "template",
                    "public",
                ],
                vec![
                    SqlValue::from(portfolio.portfolio_name.as_str()),
                    SqlValue::from(usersid),
                    SqlValue::from(portfolio.description),
                    SqlValue::from(Value::from(portfolio.technologies)),
                    SqlValue::from(portfolio.config),
                    SqlValue::from(portfolio.template),
                    SqlValue::from(portfolio.public),
                ],
            )
            .await?;

        ensure_affected(outcome.rows_affected, "Portfolio not added")?;
        info!(
            "User '{}' created portfolio '{}'",
            user_name, portfolio.portfolio_name
        );

        Ok(outcome.last_insert_id)
    }

    /// Partial update of a portfolio owned by `user_name`. Setting `name`
    /// renames it.
    pub async fn update_portfolio(
        &self,
        user_name: &str,
        portfolio_name: &str,
        updates: PortfolioUpdate,
        token: &str,
    ) -> AccessErrorResult<u64> {
        self.verify_token(user_name, token)?;
        if updates.is_empty() {
            return Err(AccessError::validation("No fields to update", None));
        }

        let PortfolioUpdate {
            name,
            description,
            technologies,
            config,
            template,
            public,
        } = updates;

        let mut assignments: Vec<(&str, SqlValue)> = Vec::new();
        if let Some(name) = name {
            validate_portfolio_name(&name)?;
            assignments.push(("name", SqlValue::from(name)));
        }
        if let Some(description) = description {
            assignments.push(("description", SqlValue::from(description)));
        }
        if let Some(technologies) = technologies {
            assignments.push(("technologies", SqlValue::from(Value::from(technologies))));
        }
        if let Some(config) = config {
            assignments.push(("config", SqlValue::from(config)));
        }
        if let Some(template) = template {
            assignments.push(("template", SqlValue::from(template)));
        }
        if let Some(public) = public {
            assignments.push(("public", SqlValue::from(public)));
        }

        let usersid = self.get_user_id(user_name).await?;
        let affected = self
            .store
            .update_one(
                Table::Portfolios,
                assignments,
                vec![
                    Filter::eq("name", portfolio_name),
                    Filter::eq("usersid", usersid),
                ],
            )
            .await?;

        ensure_affected(affected, "Update portfolio")
    }

    pub async fn delete_portfolio(
        &self,
        user_name: &str,
        portfolio_name: &str,
        token: &str,
    ) -> AccessErrorResult<u64> {
        self.verify_token(user_name, token)?;

        let usersid = self.get_user_id(user_name).await?;
        let affected = self
            .store
            .delete_one(
                Table::Portfolios,
                vec![
                    Filter::eq("name", portfolio_name),
                    Filter::eq("usersid", usersid),
                ],
            )
            .await?;

        let affected = ensure_affected(
            affected,
            &format!("No portfolio '{}' deleted", portfolio_name),
        )?;
        info!("User '{}' deleted portfolio '{}'", user_name, portfolio_name);
        Ok(affected)
    }
}
