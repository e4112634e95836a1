use crate::access_layer::ensure_affected;
use crate::{AccessError, AccessLayer, Result as AccessErrorResult};

use pf_core::{NewUser, UserUpdate, validate_user_name};
use pf_db::{Filter, SqlValue, Table};

use log::info;

impl AccessLayer {
    /// Register a user. Returns the new user id.
    pub async fn add_new_user(&self, user: NewUser) -> AccessErrorResult<i64> {
        validate_user_name(&user.user_name)?;
        if user.password.is_empty() {
            return Err(AccessError::validation(
                "password cannot be empty",
                Some("password"),
            ));
        }

        let hash = self.hash_password(user.password).await?;

        let outcome = self
            .store
            .insert_one(
                Table::Users,
                &[
                    "username",
                    "email",
                    "pw",
                    "preferences",
                    "location",
                    "userimage",
                    "firstname",
                    "lastname",
                    "linkedin",
                    "usergithuburl",
                    "userbio",
                ],
                vec![
                    SqlValue::from(user.user_name.as_str()),
                    SqlValue::from(user.email),
                    SqlValue::from(hash),
                    SqlValue::from(user.preferences),
                    SqlValue::from(user.location),
                    SqlValue::from(user.user_image),
                    SqlValue::from(user.firstname),
                    SqlValue::from(user.lastname),
                    SqlValue::from(user.linkedin),
                    SqlValue::from(user.usergithuburl),
                    SqlValue::from(user.userbio),
                ],
            )
            .await?;

        ensure_affected(
            outcome.rows_affected,
            &format!("User '{}' not added", user.user_name),
        )?;
        info!(
            "Registered user '{}' (id {})",
            user.user_name, outcome.last_insert_id
        );

        Ok(outcome.last_insert_id)
    }

    pub async fn update_user(
        &self,
        user_name: &str,
        updates: UserUpdate,
        token: &str,
    ) -> AccessErrorResult<u64> {
        self.verify_token(user_name, token)?;
        if updates.is_empty() {
            return Err(AccessError::validation("No fields to update", None));
        }

        let UserUpdate {
            email,
            password,
            preferences,
            location,
            userimage,
            firstname,
            lastname,
            linkedin,
            usergithuburl,
            userbio,
        } = updates;

        let mut assignments: Vec<(&str, SqlValue)> = Vec::new();
        if let Some(password) = password {
            if password.is_empty() {
                return Err(AccessError::validation(
                    "password cannot be empty",
                    Some("password"),
                ));
            }
            assignments.push(("pw", SqlValue::from(self.hash_password(password).await?)));
        }
        let text_fields = [
            ("email", email),
            ("location", location),
            ("userimage", userimage),
            ("firstname", firstname),
            ("lastname", lastname),
            ("linkedin", linkedin),
            ("usergithuburl", usergithuburl),
            ("userbio", userbio),
        ];
        for (column, value) in text_fields {
            if let Some(value) = value {
                assignments.push((column, SqlValue::from(value)));
            }
        }
        if let Some(preferences) = preferences {
            assignments.push(("preferences", SqlValue::from(preferences)));
        }

        let affected = self
            .store
            .update_one(
                Table::Users,
                assignments,
                vec![Filter::eq("username", user_name)],
            )
            .await?;

        ensure_affected(affected, "Update user")
    }

    /// Delete a user. Their portfolios and projects go with them.
    pub async fn delete_user(&self, user_name: &str, token: &str) -> AccessErrorResult<u64> {
        self.verify_token(user_name, token)?;

        let affected = self
            .store
            .delete_one(Table::Users, vec![Filter::eq("username", user_name)])
            .await?;

        let affected = ensure_affected(affected, &format!("No user '{}' deleted", user_name))?;
        info!("Deleted user '{}'", user_name);
        Ok(affected)
    }
}
