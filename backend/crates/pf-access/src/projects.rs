use crate::access_layer::ensure_affected;
use crate::{AccessError, AccessLayer, Result as AccessErrorResult};

use pf_core::{NewProject, ProjectUpdate};
use pf_db::{Filter, SqlValue, Table};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{info, warn};

impl AccessLayer {
    /// Add a project to one of `user_name`'s portfolios. Returns the new
    /// project id.
    pub async fn add_new_project(
        &self,
        user_name: &str,
        project: NewProject,
        token: &str,
    ) -> AccessErrorResult<i64> {
        self.verify_token(user_name, token)?;

        let usersid = self.get_user_id(user_name).await?;
        let owner = self
            .find_one(
                Table::Portfolios,
                Filter::eq("id", project.portfolioid),
                &["usersid"],
            )
            .await?
            .and_then(|row| row.get("usersid").and_then(|v| v.as_i64()))
            .ok_or_else(|| {
                AccessError::not_found(format!("No such portfolio id {}.", project.portfolioid))
            })?;

        if owner != usersid {
            warn!(
                "User '{}' tried to add a project to portfolio {} they do not own",
                user_name, project.portfolioid
            );
            return Err(AccessError::Forbidden {
                message: "You do not own this portfolio.".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let outcome = self
            .store
            .insert_one(
                Table::Projects,
                &[
                    "portfolioid",
                    "usersid",
                    "projectname",
                    "description",
                    "imageurl",
                    "githuburl",
                    "liveurl",
                ],
                vec![
                    SqlValue::from(project.portfolioid),
                    SqlValue::from(usersid),
                    SqlValue::from(project.projectname),
                    SqlValue::from(project.description),
                    SqlValue::from(project.imageurl),
                    SqlValue::from(project.githuburl),
                    SqlValue::from(project.liveurl),
                ],
            )
            .await?;

        ensure_affected(outcome.rows_affected, "Project not added")?;
        info!(
            "User '{}' added project {} to portfolio {}",
            user_name, outcome.last_insert_id, project.portfolioid
        );

        Ok(outcome.last_insert_id)
    }

    pub async fn update_project(
        &self,
        user_name: &str,
        project_id: i64,
        updates: ProjectUpdate,
        token: &str,
    ) -> AccessErrorResult<u64> {
        self.verify_token(user_name, token)?;
        if updates.is_empty() {
            return Err(AccessError::validation("No fields to update", None));
        }

        let ProjectUpdate {
            projectname,
            description,
            imageurl,
            githuburl,
            liveurl,
        } = updates;

        let assignments: Vec<(&str, SqlValue)> = [
            ("projectname", projectname),
            ("description", description),
            ("imageurl", imageurl),
            ("githuburl", githuburl),
            ("liveurl", liveurl),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, SqlValue::from(v))))
        .collect();

        let usersid = self.get_user_id(user_name).await?;
        let affected = self
            .store
            .update_one(
                Table::Projects,
                assignments,
                vec![Filter::eq("id", project_id), Filter::eq("usersid", usersid)],
            )
            .await?;

        ensure_affected(affected, "Update project")
    }

    pub async fn delete_project(
        &self,
        user_name: &str,
        project_id: i64,
        token: &str,
    ) -> AccessErrorResult<u64> {
        self.verify_token(user_name, token)?;

        let usersid = self.get_user_id(user_name).await?;
        let affected = self
            .store
            .delete_one(
                Table::Projects,
                vec![Filter::eq("id", project_id), Filter::eq("usersid", usersid)],
            )
            .await?;

        let affected = ensure_affected(affected, &format!("No project {} deleted", project_id))?;
        info!("User '{}' deleted project {}", user_name, project_id);
        Ok(affected)
    }
}
