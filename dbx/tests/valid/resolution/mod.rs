//! # Finding implementations through registries

pub mod many_batches;
pub mod two_interfaces;
pub mod unregistered;
