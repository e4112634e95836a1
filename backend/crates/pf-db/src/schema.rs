//! Static description of the tables the primitives may touch.

use crate::{DbError, Result as DbErrorResult, SqlValue};

use std::panic::Location;

use error_location::ErrorLocation;

/// Storage class of a column, used for binding checks and row decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    Bool,
    /// Serialized JSON stored as TEXT
    Json,
}

impl ColumnKind {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Integer => "an integer",
            Self::Text => "text",
            Self::Bool => "a boolean",
            Self::Json => "JSON",
        }
    }

    pub fn accepts(&self, value: &SqlValue) -> bool {
        matches!(
            (self, value),
            (_, SqlValue::Null)
                | (Self::Integer, SqlValue::Integer(_))
                | (Self::Integer, SqlValue::Bool(_))
                | (Self::Bool, SqlValue::Bool(_))
                | (Self::Bool, SqlValue::Integer(_))
                | (Self::Text, SqlValue::Text(_))
                | (Self::Json, SqlValue::Json(_))
                | (Self::Json, SqlValue::Text(_))
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn col(name: &'static str, kind: ColumnKind) -> ColumnDef {
    ColumnDef { name, kind }
}

const USERS: &[ColumnDef] = &[
    col("id", ColumnKind::Integer),
    col("username", ColumnKind::Text),
    col("pw", ColumnKind::Text),
    col("email", ColumnKind::Text),
    col("preferences", ColumnKind::Json),
    col("location", ColumnKind::Text),
    col("userimage", ColumnKind::Text),
    col("firstname", ColumnKind::Text),
    col("lastname", ColumnKind::Text),
    col("linkedin", ColumnKind::Text),
    col("usergithuburl", ColumnKind::Text),
    col("userbio", ColumnKind::Text),
];

const PORTFOLIOS: &[ColumnDef] = &[
    col("id", ColumnKind::Integer),
    col("name", ColumnKind::Text),
    col("usersid", ColumnKind::Integer),
    col("description", ColumnKind::Text),
    col("technologies", ColumnKind::Json),
    col("config", ColumnKind::Json),
    col("template", ColumnKind::Text),
    col("public", ColumnKind::Bool),
];

const PROJECTS: &[ColumnDef] = &[
    col("id", ColumnKind::Integer),
    col("portfolioid", ColumnKind::Integer),
    col("usersid", ColumnKind::Integer),
    col("imageurl", ColumnKind::Text),
    col("githuburl", ColumnKind::Text),
    col("liveurl", ColumnKind::Text),
    col("description", ColumnKind::Text),
    col("projectname", ColumnKind::Text),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Portfolios,
    Projects,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Portfolios => "portfolios",
            Self::Projects => "projects",
        }
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        match self {
            Self::Users => USERS,
            Self::Portfolios => PORTFOLIOS,
            Self::Projects => PROJECTS,
        }
    }

    /// Look up a column by name, rejecting anything outside the schema
    #[track_caller]
    pub fn column(&self, name: &str) -> DbErrorResult<ColumnDef> {
        self.columns()
            .iter()
            .find(|c| c.name == name)
            .copied()
            .ok_or_else(|| DbError::UnknownColumn {
                table: self.as_str().to_string(),
                column: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Resolve a non-empty list of column names
    #[track_caller]
    pub fn resolve(&self, names: &[&str]) -> DbErrorResult<Vec<ColumnDef>> {
        if names.is_empty() {
            return Err(DbError::invalid_statement(format!(
                "no columns given for table '{}'",
                self.as_str()
            )));
        }

        names.iter().map(|name| self.column(name)).collect()
    }

    /// Reject a value whose type does not fit the column
    #[track_caller]
    pub fn check_value(&self, column: ColumnDef, value: &SqlValue) -> DbErrorResult<()> {
        if column.kind.accepts(value) {
            Ok(())
        } else {
            Err(DbError::TypeMismatch {
                table: self.as_str().to_string(),
                column: column.name.to_string(),
                expected: column.kind.describe(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
