//! # Unparser
//! Renders the [IR](super::ir) as tokens. This is the only place generated
//! code is written, and every rendered fragment is checked (in debug builds)
//! to parse as the syntax it claims to be.

use super::{
    ir::{BatchItem, BatchUnit, Binding, CompiledMethod, Extract, ImplUnit, Registry},
    namer::DbxNamer,
};
use crate::{types::FailureMode, utils::tokens::Tokens};
use quote::{quote, ToTokens};
use syn::{Expr, File, ImplItemFn, ItemImpl, ItemMod, LitStr, Stmt};

/// All extraction reads the first column.
const RESULT_COLUMN: usize = 1;

fn render_binding(
    Binding {
        position,
        param,
        tag,
    }: &Binding,
    namer: &DbxNamer,
) -> Tokens<Stmt> {
    let DbxNamer {
        closure_statement,
        statement_method_bind,
        path_wire_tag,
        ..
    } = namer;
    let variant = tag.variant();
    quote! {
        #closure_statement.#statement_method_bind(#position, &#param, #path_wire_tag::#variant)?;
    }
    .into()
}

fn render_extract(extract: &Extract, namer: &DbxNamer) -> Tokens<Expr> {
    let DbxNamer {
        closure_statement,
        statement_method_query,
        statement_method_result_set,
        path_materialize,
        path_result_source,
        materialize_first,
        materialize_finish,
        ..
    } = namer;
    let rows = quote!(&mut #closure_statement.#statement_method_query());
    match extract {
        Extract::Finish => quote!(#path_materialize::#materialize_finish(#rows)),
        Extract::ResultSet => quote!(#closure_statement.#statement_method_result_set()),
        Extract::Scalar(extraction) => {
            let accessor = extraction.accessor();
            quote!(#path_materialize::#materialize_first(#rows, #RESULT_COLUMN, #path_result_source::#accessor))
        }
        Extract::Collection { kind, element } => {
            let materializer = kind.materializer();
            let accessor = element.accessor();
            quote!(#path_materialize::#materializer(#rows, #RESULT_COLUMN, #path_result_source::#accessor))
        }
    }
    .into()
}

pub fn render_method(method: &CompiledMethod, namer: &DbxNamer) -> Tokens<ImplItemFn> {
    let CompiledMethod {
        signature,
        query,
        bindings,
        extract,
        failure,
    } = method;
    let DbxNamer {
        path_execute,
        path_unchecked,
        impl_field_handle,
        closure_statement,
        ..
    } = namer;

    let bindings = bindings.iter().map(|b| render_binding(b, namer));
    let extract = render_extract(extract, namer);
    let execution = quote! {
        #path_execute(&self.#impl_field_handle, #query, |#closure_statement| {
            #(#bindings)*
            #extract
        })
    };
    let body = match failure {
        FailureMode::Unchecked => quote!(#path_unchecked(#execution)),
        FailureMode::Propagate => {
            quote!(::core::result::Result::map_err(#execution, ::core::convert::Into::into))
        }
    };
    quote! {
        #signature {
            #body
        }
    }
    .into()
}

pub fn render_impl(unit: &ImplUnit, namer: &DbxNamer) -> Tokens<File> {
    let ImplUnit {
        name,
        interface,
        vis,
        methods,
    } = unit;
    let DbxNamer {
        path_handle,
        path_dao,
        impl_field_handle,
        impl_method_new,
        dao_method_handle,
        ..
    } = namer;
    let doc = LitStr::new(
        &format!("Generated implementation of [`{interface}`]."),
        interface.span(),
    );
    let methods = methods.iter().map(|m| render_method(m, namer));
    let dao_impl: Tokens<ItemImpl> = quote! {
        impl #path_dao for #name {
            fn #dao_method_handle(&self) -> &#path_handle {
                &self.#impl_field_handle
            }
        }
    }
    .into();
    quote! {
        #[doc = #doc]
        #vis struct #name {
            #impl_field_handle: #path_handle,
        }

        impl #name {
            #vis fn #impl_method_new(#impl_field_handle: #path_handle) -> Self {
                Self { #impl_field_handle }
            }
        }

        #dao_impl

        impl #interface for #name {
            #(#methods)*
        }
    }
    .into()
}

pub fn render_registry(registry: &Registry, namer: &DbxNamer) -> Tokens<File> {
    let Registry {
        name,
        batch,
        entries,
    } = registry;
    let DbxNamer {
        path_handle,
        path_dao_registry,
        path_manifest,
        impl_method_new,
        registry_param_interface,
        registry_param_handle,
        const_manifest,
        ..
    } = namer;
    let batch_name = LitStr::new(&batch.to_string(), batch.span());
    let interface_names = entries
        .iter()
        .map(|e| LitStr::new(&e.interface.to_string(), e.interface.span()));
    let lookups = entries.iter().map(|entry| {
        let interface = &entry.interface;
        let implementation = &entry.implementation;
        quote! {
            if #registry_param_interface == ::core::any::TypeId::of::<dyn #interface>() {
                let dao: ::std::boxed::Box<dyn #interface> = ::std::boxed::Box::new(
                    #implementation::#impl_method_new(::core::clone::Clone::clone(#registry_param_handle))
                );
                return ::core::option::Option::Some(::std::boxed::Box::new(dao));
            }
        }
    });
    quote! {
        /// Looks up the implementations generated in this batch.
        pub struct #name;

        impl #path_dao_registry for #name {
            fn name(&self) -> &'static str {
                #batch_name
            }

            fn interfaces(&self) -> &'static [&'static str] {
                &[#(#interface_names),*]
            }

            fn get(
                &self,
                #registry_param_interface: ::core::any::TypeId,
                #registry_param_handle: &#path_handle,
            ) -> ::core::option::Option<::std::boxed::Box<dyn ::core::any::Any>> {
                #(#lookups)*
                ::core::option::Option::None
            }
        }

        /// Points the resolver at this batch's registry.
        pub const #const_manifest: #path_manifest = #path_manifest::new(#batch_name, &#name);
    }
    .into()
}

pub fn render_batch(unit: &BatchUnit, namer: &DbxNamer) -> Tokens<ItemMod> {
    let BatchUnit {
        name,
        public,
        items,
        registry,
    } = unit;
    let vis = if *public { quote!(pub) } else { quote!() };
    let items = items.iter().map(|item| match item {
        BatchItem::Passthrough(item) => item.to_token_stream(),
        BatchItem::Interface(interface, implementation) => {
            let implementation = implementation.as_ref().map(|i| render_impl(i, namer));
            quote! {
                #interface
                #implementation
            }
        }
    });
    let registry = render_registry(registry, namer);
    quote! {
        #vis mod #name {
            // lints on generated code would point at the user's declarations
            #![allow(unused_variables)]
            #![allow(unused_imports)]
            #![allow(dead_code)]

            use super::*;

            #(#items)*

            #registry
        }
    }
    .into()
}
