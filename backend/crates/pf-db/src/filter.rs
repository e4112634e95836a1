use crate::SqlValue;

/// Equality condition on one column. Multiple filters are AND-ed.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter<'a> {
    pub column: &'a str,
    pub value: SqlValue,
}

impl<'a> Filter<'a> {
    pub fn eq(column: &'a str, value: impl Into<SqlValue>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}
