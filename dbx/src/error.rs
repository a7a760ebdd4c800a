use crate::WireTag;
use rusqlite::types::{FromSqlError, Type};
use thiserror::Error;

/// A failure preparing, binding, executing or extracting from a query.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("parameter {position} is declared {tag} but was bound as {found}")]
    Binding {
        position: usize,
        tag: WireTag,
        found: Type,
    },

    #[error("could not extract column {column}: {source}")]
    Extraction {
        column: usize,
        #[source]
        source: FromSqlError,
    },

    #[error("column {column} is out of range for a row of {count} columns")]
    Column { column: usize, count: usize },

    #[error("no current row, the result has not been advanced onto one")]
    NoRow,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("no registry provides an implementation of `{interface}`")]
    NotFound { interface: &'static str },
}

pub type Result<T> = std::result::Result<T, ExecutionError>;

/// Unwraps the result of an unchecked query method.
/// ## Panics
/// With the cause of the failure, when the query failed.
#[track_caller]
pub fn unchecked<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("query execution failed: {err}"),
    }
}
