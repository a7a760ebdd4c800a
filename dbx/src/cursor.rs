//! # Result sources
//! Row-at-a-time access to query results.
//! - [`Cursor`] reads rows from the executing statement as it advances.
//! - [`ResultSet`] holds every row, and is owned by the caller.
//!
//! Columns are numbered from 1.

use crate::{ExecutionError, Result, Value};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rusqlite::{
    types::{FromSql, ValueRef},
    Rows,
};
use std::collections::VecDeque;

/// A source of rows, with typed accessors on the current row.
pub trait ResultSource {
    /// Move onto the next row, `false` once the rows are exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// The values of the current row.
    fn current(&self) -> Option<&[Value]>;

    fn get<T: FromSql>(&self, column: usize) -> Result<T> {
        let row = self.current().ok_or(ExecutionError::NoRow)?;
        let value = column
            .checked_sub(1)
            .and_then(|index| row.get(index))
            .ok_or(ExecutionError::Column {
                column,
                count: row.len(),
            })?;
        T::column_result(ValueRef::from(value))
            .map_err(|source| ExecutionError::Extraction { column, source })
    }

    fn get_i8(&self, column: usize) -> Result<i8> {
        self.get(column)
    }

    fn get_i16(&self, column: usize) -> Result<i16> {
        self.get(column)
    }

    fn get_i32(&self, column: usize) -> Result<i32> {
        self.get(column)
    }

    fn get_i64(&self, column: usize) -> Result<i64> {
        self.get(column)
    }

    fn get_f32(&self, column: usize) -> Result<f32> {
        self.get(column)
    }

    fn get_f64(&self, column: usize) -> Result<f64> {
        self.get(column)
    }

    fn get_bool(&self, column: usize) -> Result<bool> {
        self.get(column)
    }

    fn get_string(&self, column: usize) -> Result<String> {
        self.get(column)
    }

    fn get_date(&self, column: usize) -> Result<NaiveDate> {
        self.get(column)
    }

    fn get_time(&self, column: usize) -> Result<NaiveTime> {
        self.get(column)
    }

    fn get_datetime(&self, column: usize) -> Result<NaiveDateTime> {
        self.get(column)
    }

    fn get_instant(&self, column: usize) -> Result<DateTime<Utc>> {
        self.get(column)
    }

    fn get_offset_datetime(&self, column: usize) -> Result<DateTime<FixedOffset>> {
        self.get(column)
    }

    fn get_blob(&self, column: usize) -> Result<Vec<u8>> {
        self.get(column)
    }

    fn get_value(&self, column: usize) -> Result<Value> {
        self.get(column)
    }
}

fn copy_row(row: &rusqlite::Row<'_>) -> Result<Vec<Value>> {
    let count = row.as_ref().column_count();
    (0..count)
        .map(|index| row.get::<_, Value>(index).map_err(ExecutionError::from))
        .collect()
}

/// Reads the rows of an executing statement.
pub struct Cursor<'stmt> {
    rows: Rows<'stmt>,
    current: Option<Vec<Value>>,
}

impl<'stmt> Cursor<'stmt> {
    pub(crate) fn new(rows: Rows<'stmt>) -> Self {
        Self {
            rows,
            current: None,
        }
    }
}

impl ResultSource for Cursor<'_> {
    fn advance(&mut self) -> Result<bool> {
        self.current = match self.rows.next()? {
            Some(row) => Some(copy_row(row)?),
            None => None,
        };
        Ok(self.current.is_some())
    }

    fn current(&self) -> Option<&[Value]> {
        self.current.as_deref()
    }
}

/// Every remaining row of a query, detached from the statement that produced
/// it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    pending: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl ResultSet {
    pub(crate) fn collect(mut cursor: Cursor<'_>) -> Result<Self> {
        let mut pending = VecDeque::new();
        while cursor.advance()? {
            if let Some(row) = cursor.current.take() {
                pending.push_back(row);
            }
        }
        Ok(Self {
            pending,
            current: None,
        })
    }

    /// The number of rows not yet advanced onto.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl From<Vec<Vec<Value>>> for ResultSet {
    fn from(rows: Vec<Vec<Value>>) -> Self {
        Self {
            pending: rows.into(),
            current: None,
        }
    }
}

impl ResultSource for ResultSet {
    fn advance(&mut self) -> Result<bool> {
        self.current = self.pending.pop_front();
        Ok(self.current.is_some())
    }

    fn current(&self) -> Option<&[Value]> {
        self.current.as_deref()
    }
}
