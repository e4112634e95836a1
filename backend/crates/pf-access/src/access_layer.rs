use crate::{AccessError, Result as AccessErrorResult};

use pf_auth::{Claims, PasswordHasher, TokenService};
use pf_db::{Filter, Row, Table, TableStore};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// User, portfolio and project operations composed from the table primitives.
///
/// Every write except registration is gated on a token whose subject is the
/// acting user. Cheap to clone; all members share their state.
#[derive(Clone)]
pub struct AccessLayer {
    pub(crate) store: TableStore,
    pub(crate) tokens: TokenService,
    pub(crate) hasher: PasswordHasher,
}

impl AccessLayer {
    pub fn new(store: TableStore, tokens: TokenService, hasher: PasswordHasher) -> Self {
        Self {
            store,
            tokens,
            hasher,
        }
    }

    /// Check `token` is valid and was issued to `user_name`.
    pub fn verify_token(&self, user_name: &str, token: &str) -> AccessErrorResult<Claims> {
        self.tokens
            .verify_subject(user_name, token)
            .map_err(|e| {
                warn!("Token rejected for '{}': {}", user_name, e);
                AccessError::from(e)
            })
    }

    /// Validate a token without tying it to a particular user
    pub fn authenticate(&self, token: &str) -> AccessErrorResult<Claims> {
        Ok(self.tokens.validate(token)?)
    }

    /// Liveness check against the store
    pub async fn ping(&self) -> AccessErrorResult<()> {
        self.store.ping().await?;
        Ok(())
    }

    /// Hashing is CPU-bound and deliberately slow, so it runs off the
    /// async workers.
    pub(crate) async fn hash_password(&self, password: String) -> AccessErrorResult<String> {
        let hasher = self.hasher.clone();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccessError::Hashing {
                message: format!("hash task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })??;
        Ok(hash)
    }

    pub(crate) async fn verify_password(
        &self,
        password: String,
        stored_hash: String,
    ) -> AccessErrorResult<bool> {
        let hasher = self.hasher.clone();
        let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| AccessError::Hashing {
                message: format!("verify task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })??;
        Ok(valid)
    }

    /// First row of a single-column-filtered select, if any
    pub(crate) async fn find_one(
        &self,
        table: Table,
        filter: Filter<'_>,
        columns: &[&str],
    ) -> AccessErrorResult<Option<Row>> {
        let rows = self.store.select_some_where(table, filter, columns).await?;
        Ok(rows.into_iter().next())
    }
}

/// Zero affected rows means the target did not exist or was not the
/// caller's to change.
#[track_caller]
pub(crate) fn ensure_affected(rows_affected: u64, operation: &str) -> AccessErrorResult<u64> {
    if rows_affected == 0 {
        warn!("{} affected no rows", operation);
        return Err(AccessError::no_rows(operation));
    }
    debug!("{} affected {} row(s)", operation, rows_affected);
    Ok(rows_affected)
}

#[track_caller]
pub(crate) fn from_row<T: DeserializeOwned>(row: Row) -> AccessErrorResult<T> {
    serde_json::from_value(Value::Object(row))
        .map_err(|e| AccessError::internal(format!("unexpected row shape: {}", e)))
}

#[track_caller]
pub(crate) fn id_of(row: &Row, column: &str) -> AccessErrorResult<i64> {
    row.get(column)
        .and_then(Value::as_i64)
        .ok_or_else(|| AccessError::internal(format!("row is missing integer '{}'", column)))
}
