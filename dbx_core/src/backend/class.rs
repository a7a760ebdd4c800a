//! Assembles the implementation unit of one interface.
//! - Every method is compiled, and every failure reported, before deciding.
//! - A single failing method means no implementation for the whole interface.

use super::{ir::ImplUnit, method::compile_method, namer::DbxNamer};
use crate::{
    frontend::{errors::CompileError, extract::InterfaceDescriptor},
    utils::misc::{collect_all, singlelist},
};
use std::collections::LinkedList;

pub fn assemble(
    interface: InterfaceDescriptor,
    namer: &DbxNamer,
) -> Result<ImplUnit, LinkedList<CompileError>> {
    let InterfaceDescriptor { name, vis, methods } = interface;
    let methods = collect_all(
        methods
            .into_iter()
            .map(|method| compile_method(method).map_err(singlelist)),
    )?;
    Ok(ImplUnit {
        name: namer.impl_name(&name),
        interface: name,
        vis,
        methods,
    })
}
