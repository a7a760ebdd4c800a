//! # Materializers
//! Drain a [`ResultSource`] into the value a query method returns.
//! - A failure on any row fails the whole operation, no partially collected
//!   container is ever returned.

use crate::{ExecutionError, ResultSource, Result};
use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    hash::Hash,
};

/// Containers that keep every element, in row order.
pub trait ListLike<T>: Default {
    fn push_row(&mut self, item: T);
}

impl<T> ListLike<T> for Vec<T> {
    fn push_row(&mut self, item: T) {
        self.push(item)
    }
}

impl<T> ListLike<T> for VecDeque<T> {
    fn push_row(&mut self, item: T) {
        self.push_back(item)
    }
}

/// Containers that keep one of each equal element.
pub trait SetLike<T>: Default {
    fn insert_row(&mut self, item: T);
}

impl<T: Eq + Hash> SetLike<T> for HashSet<T> {
    fn insert_row(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Ord> SetLike<T> for BTreeSet<T> {
    fn insert_row(&mut self, item: T) {
        self.insert(item);
    }
}

/// Extract `column` from every remaining row.
pub fn drain<S, T>(
    source: &mut S,
    column: usize,
    extract: impl Fn(&S, usize) -> Result<T>,
    mut sink: impl FnMut(T),
) -> Result<()>
where
    S: ResultSource,
{
    while source.advance()? {
        sink(extract(&*source, column)?);
    }
    Ok(())
}

pub fn to_list<C, S, T>(
    source: &mut S,
    column: usize,
    extract: impl Fn(&S, usize) -> Result<T>,
) -> Result<C>
where
    C: ListLike<T>,
    S: ResultSource,
{
    let mut list = C::default();
    drain(source, column, extract, |item| list.push_row(item))?;
    Ok(list)
}

pub fn to_set<C, S, T>(
    source: &mut S,
    column: usize,
    extract: impl Fn(&S, usize) -> Result<T>,
) -> Result<C>
where
    C: SetLike<T>,
    S: ResultSource,
{
    let mut set = C::default();
    drain(source, column, extract, |item| set.insert_row(item))?;
    Ok(set)
}

/// Extract `column` from the first row, ignoring the rest.
/// ## Errors
/// [`rusqlite::Error::QueryReturnedNoRows`] when there is no first row.
pub fn first<S, T>(
    source: &mut S,
    column: usize,
    extract: impl Fn(&S, usize) -> Result<T>,
) -> Result<T>
where
    S: ResultSource,
{
    if source.advance()? {
        extract(&*source, column)
    } else {
        Err(ExecutionError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }
}

/// Step through every row without extracting anything.
pub fn finish<S: ResultSource>(source: &mut S) -> Result<()> {
    while source.advance()? {}
    Ok(())
}
