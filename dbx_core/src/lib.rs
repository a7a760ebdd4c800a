#![doc = include_str!("../README.md")]

extern crate proc_macro;

mod backend;
mod frontend;
mod types;
mod utils;

use proc_macro_error2::{proc_macro_error, Diagnostic};

/// Generates data access implementations for the `#[dao]` traits of a batch.
/// See the `dbx` crate for the full description.
#[proc_macro_error]
#[proc_macro]
pub fn daos(tk: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match syn::parse::<frontend::Batch>(tk) {
        Err(err) => err.to_compile_error().into(),
        Ok(batch) => {
            let (tks, errors) = backend::compile_batch(batch);
            errors.into_iter().map(Diagnostic::from).for_each(Diagnostic::emit);
            tks.into()
        }
    }
}
