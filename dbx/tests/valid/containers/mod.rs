//! # Collecting every row of a result

pub mod empty_results;
pub mod lists;
