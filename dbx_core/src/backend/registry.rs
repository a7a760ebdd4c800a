//! # Registry emission
//! One registry per batch, mapping each successfully compiled interface to its
//! implementation. The registry type name carries a token derived from the
//! batch's content, so the same batch always produces the same name and
//! distinct batches in one program do not collide.

use super::{
    ir::{ImplUnit, Registry, RegistryEntry},
    namer::DbxNamer,
};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use syn::Ident;

fn freshness_token(batch: &Ident, entries: &[RegistryEntry]) -> u64 {
    let mut hasher = FxHasher::default();
    batch.to_string().hash(&mut hasher);
    for RegistryEntry {
        interface,
        implementation,
    } in entries
    {
        interface.to_string().hash(&mut hasher);
        implementation.to_string().hash(&mut hasher);
    }
    hasher.finish()
}

pub fn build_registry<'a>(
    batch: &Ident,
    units: impl Iterator<Item = &'a ImplUnit>,
    namer: &DbxNamer,
) -> Registry {
    let entries: Vec<_> = units
        .map(|unit| RegistryEntry {
            interface: unit.interface.clone(),
            implementation: unit.name.clone(),
        })
        .collect();
    Registry {
        name: namer.registry_name(freshness_token(batch, &entries)),
        batch: batch.clone(),
        entries,
    }
}
