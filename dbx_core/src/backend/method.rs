//! Compiles a single method descriptor into its [`CompiledMethod`] IR.

use super::ir::{Binding, CompiledMethod, Extract};
use crate::{
    frontend::{errors::CompileError, extract::MethodDescriptor},
    types::{resolve_extraction, resolve_return, ReturnShape, ValueType},
};
use quote::ToTokens;
use syn::{spanned::Spanned, ReturnType};

fn extraction_of(value: ValueType) -> crate::types::Extraction {
    // return resolution only admits values with an extraction
    match resolve_extraction(value) {
        Some(extraction) => extraction,
        None => unreachable!("{value:?} resolved as a return value"),
    }
}

pub fn compile_method(method: MethodDescriptor) -> Result<CompiledMethod, CompileError> {
    let MethodDescriptor {
        name,
        signature,
        params,
        output,
        query,
    } = method;

    let descriptor = resolve_return(&output).map_err(|reason| {
        let (ty, span) = match &output {
            ReturnType::Type(_, ty) => (ty.to_token_stream().to_string(), ty.span()),
            ReturnType::Default => (String::from("()"), name.span()),
        };
        CompileError::UnsupportedReturn {
            method: name.clone(),
            ty,
            span,
            reason,
        }
    })?;

    let bindings = params
        .into_iter()
        .enumerate()
        .map(|(index, param)| Binding {
            position: index + 1,
            param: param.name,
            tag: param.tag,
        })
        .collect();

    let extract = match descriptor.shape {
        ReturnShape::Void => Extract::Finish,
        ReturnShape::Cursor => Extract::ResultSet,
        ReturnShape::Scalar(value) => Extract::Scalar(extraction_of(value)),
        ReturnShape::Collection { kind, element } => Extract::Collection {
            kind,
            element: extraction_of(element),
        },
    };

    Ok(CompiledMethod {
        signature,
        query,
        bindings,
        extract,
        failure: descriptor.failure,
    })
}
