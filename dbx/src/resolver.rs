//! # Runtime resolution
//! Finds the generated implementation of an interface without naming the
//! generated type, by asking each registered batch's registry in turn.

use crate::{Handle, Manifest, ResolutionError};
use std::any::{type_name, TypeId};
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct Resolver {
    manifests: Vec<Manifest>,
}

impl Resolver {
    /// Registries are queried in the order given.
    pub fn new(manifests: impl IntoIterator<Item = Manifest>) -> Self {
        Self {
            manifests: manifests.into_iter().collect(),
        }
    }

    pub fn register(&mut self, manifest: Manifest) {
        self.manifests.push(manifest)
    }

    pub fn manifests(&self) -> &[Manifest] {
        &self.manifests
    }

    /// Construct an implementation of `D` (a `dyn Interface`) for the handle,
    /// from the first registry that has one.
    pub fn resolve<D: ?Sized + 'static>(
        &self,
        handle: &Handle,
    ) -> Result<Box<D>, ResolutionError> {
        let interface = type_name::<D>();
        for manifest in &self.manifests {
            match manifest.registry.get(TypeId::of::<D>(), handle) {
                Some(found) => match found.downcast::<Box<D>>() {
                    Ok(dao) => {
                        debug!(interface, batch = manifest.name, "resolved");
                        return Ok(*dao);
                    }
                    Err(_) => debug!(
                        interface,
                        batch = manifest.name,
                        "registry returned a mismatched implementation"
                    ),
                },
                None => debug!(interface, batch = manifest.name, "not in registry"),
            }
        }
        Err(ResolutionError::NotFound { interface })
    }
}

/// Build a [`Resolver`] over the `MANIFEST` of each listed batch module.
/// ```ignore
/// let resolver = dbx::discover![user_db, reporting::order_db];
/// ```
#[macro_export]
macro_rules! discover {
    ($($($segment:ident)::+),* $(,)?) => {
        $crate::Resolver::new([$($($segment)::+::MANIFEST),*])
    };
}
