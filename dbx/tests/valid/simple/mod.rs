//! # Simple tests using a single feature

pub mod parameters;
pub mod user_ids;
pub mod void_methods;
