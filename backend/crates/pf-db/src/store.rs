use crate::row::decode_row;
use crate::{ColumnDef, DbError, Filter, Result as DbErrorResult, Row, SqlValue, Table};

use std::collections::HashSet;

use log::debug;
use sqlx::SqlitePool;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Result of a single-row insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub rows_affected: u64,
    pub last_insert_id: i64,
}

/// One side of an inner join
#[derive(Debug, Clone, Copy)]
pub struct JoinSide<'a> {
    pub table: Table,
    pub columns: &'a [&'a str],
    /// Column compared for equality against the other side's key
    pub key: &'a str,
}

impl<'a> JoinSide<'a> {
    pub fn new(table: Table, columns: &'a [&'a str], key: &'a str) -> Self {
        Self {
            table,
            columns,
            key,
        }
    }
}

/// Generic select/insert/update/delete over the allowlisted tables.
#[derive(Clone)]
pub struct TableStore {
    pool: SqlitePool,
}

impl TableStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// `SELECT <returned> FROM <table> WHERE <column> = ?`
    pub async fn select_some_where(
        &self,
        table: Table,
        filter: Filter<'_>,
        returned: &[&str],
    ) -> DbErrorResult<Vec<Row>> {
        let columns = table.resolve(returned)?;
        let filter_column = table.column(filter.column)?;
        table.check_value(filter_column, &filter.value)?;

        let select_list = columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            select_list,
            table.as_str(),
            filter_column.name
        );
        debug!("select_some_where: {}", sql);

        let query = bind_value(sqlx::query(&sql), filter.value)?;
        let rows = query.fetch_all(&self.pool).await?;

        rows.iter().map(|r| decode_row(r, &columns)).collect()
    }

    /// Inner join of two tables filtered on a column of the left table.
    ///
    /// Output rows are keyed by bare column names, so the selected names must
    /// not collide across the two sides.
    pub async fn select_some_join(
        &self,
        left: JoinSide<'_>,
        right: JoinSide<'_>,
        filter: Filter<'_>,
    ) -> DbErrorResult<Vec<Row>> {
        let left_columns = left.table.resolve(left.columns)?;
        let right_columns = right.table.resolve(right.columns)?;
        let left_key = left.table.column(left.key)?;
        let right_key = right.table.column(right.key)?;
        let filter_column = left.table.column(filter.column)?;
        left.table.check_value(filter_column, &filter.value)?;

        let mut seen = HashSet::new();
        for column in left_columns.iter().chain(right_columns.iter()) {
            if !seen.insert(column.name) {
                return Err(DbError::invalid_statement(format!(
                    "column '{}' selected from both '{}' and '{}'",
                    column.name, left.table, right.table
                )));
            }
        }

        let select_list = qualified(left.table, &left_columns)
            .chain(qualified(right.table, &right_columns))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT {select} FROM {l} INNER JOIN {r} ON {l}.{lk} = {r}.{rk} WHERE {l}.{f} = ?",
            select = select_list,
            l = left.table,
            r = right.table,
            lk = left_key.name,
            rk = right_key.name,
            f = filter_column.name,
        );
        debug!("select_some_join: {}", sql);

        let query = bind_value(sqlx::query(&sql), filter.value)?;
        let rows = query.fetch_all(&self.pool).await?;

        let all_columns: Vec<ColumnDef> = left_columns.into_iter().chain(right_columns).collect();
        rows.iter().map(|r| decode_row(r, &all_columns)).collect()
    }

    /// `INSERT INTO <table> (<columns>) VALUES (?, ...)`
    pub async fn insert_one(
        &self,
        table: Table,
        columns: &[&str],
        values: Vec<SqlValue>,
    ) -> DbErrorResult<InsertOutcome> {
        if columns.len() != values.len() {
            return Err(DbError::invalid_statement(format!(
                "insert into '{}' has {} columns but {} values",
                table,
                columns.len(),
                values.len()
            )));
        }

        let defs = table.resolve(columns)?;
        for (def, value) in defs.iter().zip(values.iter()) {
            table.check_value(*def, value)?;
        }

        let column_list = defs.iter().map(|c| c.name).collect::<Vec<_>>().join(", ");
        let placeholders = vec!["?"; defs.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table, column_list, placeholders
        );
        debug!("insert_one: {}", sql);

        let mut query = sqlx::query(&sql);
        for value in values {
            query = bind_value(query, value)?;
        }
        let result = query.execute(&self.pool).await?;

        Ok(InsertOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: result.last_insert_rowid(),
        })
    }

    /// `UPDATE <table> SET <col> = ?, ... WHERE <filters>`; returns rows affected
    pub async fn update_one(
        &self,
        table: Table,
        assignments: Vec<(&str, SqlValue)>,
        filters: Vec<Filter<'_>>,
    ) -> DbErrorResult<u64> {
        if assignments.is_empty() {
            return Err(DbError::invalid_statement(format!(
                "update of '{}' has no assignments",
                table
            )));
        }

        let mut set_parts = Vec::with_capacity(assignments.len());
        for (name, value) in &assignments {
            let def = table.column(name)?;
            table.check_value(def, value)?;
            set_parts.push(format!("{} = ?", def.name));
        }
        let where_clause = where_clause(table, &filters)?;

        let sql = format!(
            "UPDATE {} SET {} WHERE {}",
            table,
            set_parts.join(", "),
            where_clause
        );
        debug!("update_one: {}", sql);

        let mut query = sqlx::query(&sql);
        for (_, value) in assignments {
            query = bind_value(query, value)?;
        }
        for filter in filters {
            query = bind_value(query, filter.value)?;
        }
        let result = query.execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    /// `DELETE FROM <table> WHERE <filters>`; returns rows affected
    pub async fn delete_one(&self, table: Table, filters: Vec<Filter<'_>>) -> DbErrorResult<u64> {
        let where_clause = where_clause(table, &filters)?;
        let sql = format!("DELETE FROM {} WHERE {}", table, where_clause);
        debug!("delete_one: {}", sql);

        let mut query = sqlx::query(&sql);
        for filter in filters {
            query = bind_value(query, filter.value)?;
        }
        let result = query.execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn qualified(table: Table, columns: &[ColumnDef]) -> impl Iterator<Item = String> + '_ {
    columns
        .iter()
        .map(move |c| format!("{}.{} AS {}", table, c.name, c.name))
}

/// Builds `a = ? AND b = ?`. An unfiltered update or delete would touch every
/// row, so an empty filter list is rejected.
fn where_clause(table: Table, filters: &[Filter<'_>]) -> DbErrorResult<String> {
    if filters.is_empty() {
        return Err(DbError::invalid_statement(format!(
            "statement on '{}' has no filters",
            table
        )));
    }

    let mut parts = Vec::with_capacity(filters.len());
    for filter in filters {
        let def = table.column(filter.column)?;
        table.check_value(def, &filter.value)?;
        parts.push(format!("{} = ?", def.name));
    }

    Ok(parts.join(" AND "))
}

fn bind_value(query: SqliteQuery<'_>, value: SqlValue) -> DbErrorResult<SqliteQuery<'_>> {
    let query = match value {
        SqlValue::Null | SqlValue::Json(serde_json::Value::Null) => query.bind(None::<String>),
        SqlValue::Integer(v) => query.bind(v),
        SqlValue::Bool(v) => query.bind(i64::from(v)),
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Json(v) => {
            let text = serde_json::to_string(&v)
                .map_err(|e| DbError::invalid_statement(format!("unserializable JSON: {}", e)))?;
            query.bind(text)
        }
    };

    Ok(query)
}
