use crate::{ColumnDef, ColumnKind, DbError, Result as DbErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};
use sqlx::Row as _;
use sqlx::sqlite::SqliteRow;

/// A result row keyed by column name, in select order
pub type Row = Map<String, Value>;

/// Decode a row whose result columns line up with `columns`
pub(crate) fn decode_row(row: &SqliteRow, columns: &[ColumnDef]) -> DbErrorResult<Row> {
    let mut out = Map::with_capacity(columns.len());

    for (idx, column) in columns.iter().enumerate() {
        let value = decode_column(row, idx, column)?;
        out.insert(column.name.to_string(), value);
    }

    Ok(out)
}

fn decode_column(row: &SqliteRow, idx: usize, column: &ColumnDef) -> DbErrorResult<Value> {
    let decode_err = |e: sqlx::Error| DbError::Decode {
        column: column.name.to_string(),
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let value = match column.kind {
        ColumnKind::Integer => row
            .try_get::<Option<i64>, _>(idx)
            .map_err(decode_err)?
            .map_or(Value::Null, Value::from),
        // Stored as 0/1
        ColumnKind::Bool => row
            .try_get::<Option<i64>, _>(idx)
            .map_err(decode_err)?
            .map_or(Value::Null, |v| Value::Bool(v != 0)),
        ColumnKind::Text => row
            .try_get::<Option<String>, _>(idx)
            .map_err(decode_err)?
            .map_or(Value::Null, Value::String),
        ColumnKind::Json => row
            .try_get::<Option<String>, _>(idx)
            .map_err(decode_err)?
            .map_or(Value::Null, parse_json_text),
    };

    Ok(value)
}

/// Rows written outside this crate may hold plain text in a JSON column;
/// those come back as strings.
fn parse_json_text(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
