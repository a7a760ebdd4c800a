//! # Generated code IR
//! Structured description of everything a batch expands to. Nodes are built by
//! the [method](super::method), [class](super::class) and
//! [registry](super::registry) passes, and only turned into tokens by the
//! [unparser](super::render).

use crate::types::{ContainerKind, Extraction, FailureMode, WireTag};
use syn::{Ident, ItemTrait, LitStr, Signature, Visibility};

/// Binds one parameter to a 1-based placeholder position.
#[derive(Debug, PartialEq, Eq)]
pub struct Binding {
    pub position: usize,
    pub param: Ident,
    pub tag: WireTag,
}

/// What is done with the executed statement. Always reads column 1.
#[derive(Debug, PartialEq, Eq)]
pub enum Extract {
    /// Step to completion, discarding any rows.
    Finish,
    /// Hand the remaining rows to the caller.
    ResultSet,
    Scalar(Extraction),
    Collection {
        kind: ContainerKind,
        element: Extraction,
    },
}

pub struct CompiledMethod {
    pub signature: Signature,
    pub query: LitStr,
    pub bindings: Vec<Binding>,
    pub extract: Extract,
    pub failure: FailureMode,
}

/// The implementation of one interface.
pub struct ImplUnit {
    pub name: Ident,
    pub interface: Ident,
    pub vis: Visibility,
    pub methods: Vec<CompiledMethod>,
}

pub struct RegistryEntry {
    pub interface: Ident,
    pub implementation: Ident,
}

pub struct Registry {
    pub name: Ident,
    pub batch: Ident,
    pub entries: Vec<RegistryEntry>,
}

/// Everything generated for one batch, in declaration order.
pub struct BatchUnit {
    pub name: Ident,
    pub public: bool,
    pub items: Vec<BatchItem>,
    pub registry: Registry,
}

pub enum BatchItem {
    Passthrough(syn::Item),
    Interface(ItemTrait, Option<ImplUnit>),
}
