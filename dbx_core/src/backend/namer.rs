use crate::utils::{misc::new_id, tokens::Tokens};
use quote::{format_ident, quote};
use syn::{Ident, Path};

const INTERNAL_PREFIX: &str = "__internal_";

/// Names of the generated items, and paths to the runtime items they use.
pub struct DbxNamer {
    pub path_handle: Tokens<Path>,
    pub path_dao: Tokens<Path>,
    pub path_execute: Tokens<Path>,
    pub path_unchecked: Tokens<Path>,
    pub path_wire_tag: Tokens<Path>,
    pub path_result_source: Tokens<Path>,
    pub path_materialize: Tokens<Path>,
    pub path_dao_registry: Tokens<Path>,
    pub path_manifest: Tokens<Path>,

    pub impl_suffix: &'static str,
    pub impl_field_handle: Ident,
    pub impl_method_new: Ident,
    pub dao_method_handle: Ident,
    pub closure_statement: Ident,
    pub statement_method_bind: Ident,
    pub statement_method_query: Ident,
    pub statement_method_result_set: Ident,
    pub materialize_first: Ident,
    pub materialize_finish: Ident,

    pub registry_prefix: &'static str,
    pub registry_param_interface: Ident,
    pub registry_param_handle: Ident,
    pub const_manifest: Ident,
}

impl DbxNamer {
    pub fn new() -> Self {
        Self {
            path_handle: quote!(::dbx::Handle).into(),
            path_dao: quote!(::dbx::Dao).into(),
            path_execute: quote!(::dbx::execute).into(),
            path_unchecked: quote!(::dbx::unchecked).into(),
            path_wire_tag: quote!(::dbx::WireTag).into(),
            path_result_source: quote!(::dbx::ResultSource).into(),
            path_materialize: quote!(::dbx::materialize).into(),
            path_dao_registry: quote!(::dbx::DaoRegistry).into(),
            path_manifest: quote!(::dbx::Manifest).into(),
            impl_suffix: "Impl",
            impl_field_handle: new_id("handle"),
            impl_method_new: new_id("new"),
            dao_method_handle: new_id("handle"),
            closure_statement: new_id(&format!("{INTERNAL_PREFIX}statement")),
            statement_method_bind: new_id("bind"),
            statement_method_query: new_id("query"),
            statement_method_result_set: new_id("result_set"),
            materialize_first: new_id("first"),
            materialize_finish: new_id("finish"),
            registry_prefix: "DaoRegistry",
            registry_param_interface: new_id("interface"),
            registry_param_handle: new_id("handle"),
            const_manifest: new_id("MANIFEST"),
        }
    }

    pub fn impl_name(&self, interface: &Ident) -> Ident {
        format_ident!("{interface}{}", self.impl_suffix)
    }

    pub fn registry_name(&self, token: u64) -> Ident {
        format_ident!("{}{token:016x}", self.registry_prefix)
    }
}
