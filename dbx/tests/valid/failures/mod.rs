//! # Queries failing at run time

pub mod propagate;
