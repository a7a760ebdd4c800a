//! # dbx Code Generation
//! Compiles each marked interface of a batch into an implementation unit,
//! then emits the batch's registry.
//! - Interfaces are compiled independently, a failure in one only removes its
//!   own implementation (the trait itself is still emitted).
//! - All errors found are returned alongside the generated code.

mod class;
mod ir;
mod method;
mod namer;
mod registry;
mod render;

use crate::{
    frontend::{declarations, errors::CompileError, extract::extract_interface, Batch, Declaration},
    utils::{misc::singlelist, tokens::Tokens},
};
use ir::{BatchItem, BatchUnit};
use prettyplease::unparse;
use proc_macro2::TokenStream;
use quote::ToTokens;
use std::{collections::LinkedList, fs::File, io::Write, path::Path};
use syn::{File as SynFile, Item, ItemMod, LitStr};

pub fn compile_batch(batch: Batch) -> (TokenStream, LinkedList<CompileError>) {
    let Batch {
        name,
        options,
        items,
    } = batch;
    let namer = namer::DbxNamer::new();
    let mut errors = LinkedList::new();

    let items: Vec<_> = declarations(items)
        .into_iter()
        .map(|declaration| match declaration {
            Declaration::Passthrough(item) => BatchItem::Passthrough(item),
            Declaration::Misplaced(item, error) => {
                errors.push_back(error);
                BatchItem::Passthrough(item)
            }
            Declaration::Interface(item) => {
                let (cleaned, descriptor) = extract_interface(item);
                let unit = descriptor.and_then(|descriptor| class::assemble(descriptor, &namer));
                match unit {
                    Ok(unit) => BatchItem::Interface(cleaned, Some(unit)),
                    Err(mut es) => {
                        errors.append(&mut es);
                        BatchItem::Interface(cleaned, None)
                    }
                }
            }
        })
        .collect();

    let registry = registry::build_registry(
        &name,
        items.iter().filter_map(|item| match item {
            BatchItem::Interface(_, unit) => unit.as_ref(),
            BatchItem::Passthrough(_) => None,
        }),
        &namer,
    );

    let module = render::render_batch(
        &BatchUnit {
            name,
            public: options.public,
            items,
            registry,
        },
        &namer,
    );

    if let Some(debug_path) = options.debug_file {
        if let Err(mut es) = debug_output(&debug_path, &module) {
            errors.append(&mut es);
        }
    }

    (module.to_token_stream(), errors)
}

fn debug_output(
    debug_path: &LitStr,
    module: &Tokens<ItemMod>,
) -> Result<(), LinkedList<CompileError>> {
    let error = |message: String| {
        singlelist(CompileError::DebugOutput {
            span: debug_path.span(),
            message,
        })
    };
    let module = module
        .parse()
        .map_err(|e| error(format!("Could not parse code as a module: {e}")))?;
    let file = SynFile {
        shebang: None,
        attrs: Vec::new(),
        items: vec![Item::Mod(module)],
    };
    let mut out = File::create(Path::new(&debug_path.value()))
        .map_err(|e| error(format!("Could not create file: {e}")))?;
    out.write_all(unparse(&file).as_bytes())
        .map_err(|e| error(format!("Could not write to file: {e}")))
}
