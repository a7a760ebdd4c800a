#![doc = include_str!("../README.md")]

mod cursor;
mod error;
mod handle;
pub mod materialize;
mod registry;
mod resolver;
mod statement;
mod wire;

pub use cursor::{Cursor, ResultSet, ResultSource};
pub use error::{unchecked, ExecutionError, ResolutionError, Result};
pub use handle::Handle;
pub use registry::{Dao, DaoRegistry, Manifest};
pub use resolver::Resolver;
pub use statement::{execute, Statement};
pub use wire::WireTag;

/// Any value SQLite can store.
pub type Value = rusqlite::types::Value;

pub use dbx_core::daos;

pub mod dependencies {
    pub use chrono;
    pub use rusqlite;
}
