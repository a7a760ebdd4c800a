//! Scoped query execution.
//! - [`execute`] prepares one statement per call, and drops it on every path
//!   out of the call (including failures and panics).

use crate::{
    cursor::{Cursor, ResultSet},
    ExecutionError, Handle, Result, WireTag,
};
use rusqlite::{
    types::{ToSqlOutput, Type, ValueRef},
    ToSql,
};
use tracing::{debug, debug_span, trace};

/// A prepared statement, valid for the duration of one [`execute`] call.
pub struct Statement<'conn> {
    inner: rusqlite::Statement<'conn>,
}

fn storage_of(output: &ToSqlOutput<'_>) -> Type {
    match output {
        ToSqlOutput::Borrowed(value) => value.data_type(),
        ToSqlOutput::Owned(value) => ValueRef::from(value).data_type(),
        #[allow(unreachable_patterns)]
        _ => Type::Blob,
    }
}

impl<'conn> Statement<'conn> {
    /// Bind a value to a 1-based placeholder, checking it is stored as its
    /// declared tag requires.
    pub fn bind<V: ToSql + ?Sized>(&mut self, position: usize, value: &V, tag: WireTag) -> Result<()> {
        let found = storage_of(&value.to_sql()?);
        trace!(position, %tag, %found, "binding parameter");
        if !tag.accepts(found) {
            return Err(ExecutionError::Binding {
                position,
                tag,
                found,
            });
        }
        self.inner.raw_bind_parameter(position, value)?;
        Ok(())
    }

    /// Execute, reading rows as the cursor is advanced.
    pub fn query(&mut self) -> Cursor<'_> {
        Cursor::new(self.inner.raw_query())
    }

    /// Execute, buffering every row into a cursor owned by the caller.
    pub fn result_set(&mut self) -> Result<ResultSet> {
        ResultSet::collect(self.query())
    }

    pub fn parameter_count(&self) -> usize {
        self.inner.parameter_count()
    }
}

/// Prepare `query` on the handle's connection and run `body` against it.
pub fn execute<T>(
    handle: &Handle,
    query: &str,
    body: impl FnOnce(&mut Statement<'_>) -> Result<T>,
) -> Result<T> {
    let span = debug_span!("execute", query);
    let _guard = span.enter();
    let result = handle
        .prepare(query)
        .map_err(ExecutionError::from)
        .and_then(|inner| body(&mut Statement { inner }));
    if let Err(err) = &result {
        debug!(%err, "query failed");
    }
    result
}
