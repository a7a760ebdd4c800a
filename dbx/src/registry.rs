use crate::Handle;
use std::{
    any::{Any, TypeId},
    fmt,
};

/// Implemented by every generated implementation, exposing the connection it
/// was constructed with.
pub trait Dao {
    fn handle(&self) -> &Handle;
}

/// The lookup table generated for one `daos!` batch.
pub trait DaoRegistry {
    /// The name of the batch module.
    fn name(&self) -> &'static str;

    /// The interfaces this registry can construct, in declaration order.
    fn interfaces(&self) -> &'static [&'static str];

    /// Construct the implementation of `interface` (the [`TypeId`] of
    /// `dyn Interface`), returned as a `Box<Box<dyn Interface>>`.
    fn get(&self, interface: TypeId, handle: &Handle) -> Option<Box<dyn Any>>;
}

/// The discovery record of a batch, emitted as `<batch>::MANIFEST`.
#[derive(Clone, Copy)]
pub struct Manifest {
    pub name: &'static str,
    pub registry: &'static dyn DaoRegistry,
}

impl Manifest {
    pub const fn new(name: &'static str, registry: &'static dyn DaoRegistry) -> Self {
        Self { name, registry }
    }
}

impl fmt::Debug for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manifest")
            .field("name", &self.name)
            .field("interfaces", &self.registry.interfaces())
            .finish()
    }
}
