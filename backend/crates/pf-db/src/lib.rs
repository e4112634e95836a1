//! Table access primitives over SQLite.
//!
//! Every statement is parameterized. Table and column identifiers cannot be
//! bound, so they are checked against the static schema in [`schema`] before
//! any SQL is built.

pub mod connection;
pub mod error;
pub mod filter;
pub mod row;
pub mod schema;
pub mod store;
pub mod value;

pub use connection::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use filter::Filter;
pub use row::Row;
pub use schema::{ColumnDef, ColumnKind, Table};
pub use store::{InsertOutcome, JoinSide, TableStore};
pub use value::SqlValue;
