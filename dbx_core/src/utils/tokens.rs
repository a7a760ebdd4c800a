//! Token streams tagged with the syntax they are expected to parse as.
//! - In debug builds the tokens are parsed on construction, so a code generation
//!   mistake panics at the point it was made rather than as a confusing error
//!   in the user's crate.

use proc_macro2::TokenStream;
use quote::ToTokens;
use std::{marker::PhantomData, ops::Deref};
use syn::parse::Parse;

pub struct Tokens<T: Parse + ToTokens> {
    tks: TokenStream,
    phantom: PhantomData<T>,
}

impl<T: Parse + ToTokens> Tokens<T> {
    /// Parse the tokens into the syntax node they represent.
    pub fn parse(&self) -> syn::Result<T> {
        syn::parse2(self.tks.clone())
    }
}

impl<T: Parse + ToTokens> From<TokenStream> for Tokens<T> {
    fn from(tks: TokenStream) -> Self {
        #[cfg(debug_assertions)]
        {
            if let Err(err) = syn::parse2::<T>(tks.clone()) {
                panic!(
                    "Generated tokens do not parse as `{}`: {err}\nTokens: `{tks}`",
                    std::any::type_name::<T>(),
                )
            }
        }
        Self {
            tks,
            phantom: PhantomData,
        }
    }
}

impl<T: Parse + ToTokens> Clone for Tokens<T> {
    fn clone(&self) -> Self {
        Self {
            tks: self.tks.clone(),
            phantom: PhantomData,
        }
    }
}

impl<T: Parse + ToTokens> Deref for Tokens<T> {
    type Target = TokenStream;

    fn deref(&self) -> &Self::Target {
        &self.tks
    }
}

impl<T: Parse + ToTokens> ToTokens for Tokens<T> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.tks.to_tokens(tokens)
    }
}
