//! # Descriptor extraction
//! Turns a marked trait into an [`InterfaceDescriptor`], checking the shape of
//! the trait and its methods, and resolving every parameter's wire tag.
//! - All problems in a trait are reported together, not just the first.
//! - The trait itself is always returned with the `#[query]` markers removed,
//!   so it can be emitted even when its implementation cannot.

use super::{errors::CompileError, is_marker, QUERY_MARKER};
use crate::types::{resolve_parameter, WireTag};
use crate::utils::misc::{collect_all, singlelist};
use proc_macro2::{Span, TokenStream, TokenTree};
use quote::ToTokens;
use std::collections::LinkedList;
use syn::{
    spanned::Spanned, Attribute, FnArg, GenericParam, Ident, ItemTrait, LitStr, Pat, ReturnType,
    Signature, TraitBoundModifier, TraitItem, TraitItemFn, Type, TypeParamBound, Visibility,
    WherePredicate,
};

pub struct ParameterDescriptor {
    pub name: Ident,
    pub tag: WireTag,
}

pub struct MethodDescriptor {
    pub name: Ident,
    pub signature: Signature,
    pub params: Vec<ParameterDescriptor>,
    pub output: ReturnType,
    pub query: LitStr,
}

pub struct InterfaceDescriptor {
    pub name: Ident,
    pub vis: Visibility,
    pub methods: Vec<MethodDescriptor>,
}

fn take_queries(attrs: &mut Vec<Attribute>) -> Vec<Attribute> {
    let (queries, others) = std::mem::take(attrs)
        .into_iter()
        .partition(|attr| is_marker(attr, QUERY_MARKER));
    *attrs = others;
    queries
}

fn check_trait(item: &ItemTrait) -> LinkedList<CompileError> {
    let name = &item.ident;
    let mut errors = LinkedList::new();
    let mut unsupported = |span, feature| {
        errors.push_back(CompileError::UnsupportedTrait {
            interface: name.clone(),
            span,
            feature,
        })
    };
    if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
        unsupported(item.generics.span(), "generic parameters");
    }
    if let Some(unsafety) = &item.unsafety {
        unsupported(unsafety.span, "an `unsafe` qualifier");
    }
    if let Some(auto) = &item.auto_token {
        unsupported(auto.span, "an `auto` qualifier");
    }
    if !item.supertraits.is_empty() {
        unsupported(item.supertraits.span(), "supertraits");
    }
    errors
}

fn check_signature(sig: &Signature) -> LinkedList<CompileError> {
    let method = &sig.ident;
    let mut errors = LinkedList::new();
    let mut unsupported = |span, feature| {
        errors.push_back(CompileError::UnsupportedMethod {
            method: method.clone(),
            span,
            feature,
        })
    };
    if let Some(c) = &sig.constness {
        unsupported(c.span, "a `const` qualifier");
    }
    if let Some(a) = &sig.asyncness {
        unsupported(a.span, "an `async` qualifier");
    }
    if let Some(u) = &sig.unsafety {
        unsupported(u.span, "an `unsafe` qualifier");
    }
    if let Some(abi) = &sig.abi {
        unsupported(abi.span(), "an explicit ABI");
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        unsupported(sig.generics.span(), "generic parameters");
    }
    if let Some(variadic) = &sig.variadic {
        unsupported(variadic.span(), "variadic parameters");
    }
    errors
}

fn mentions(tks: TokenStream, word: &str) -> bool {
    tks.into_iter().any(|tt| match tt {
        TokenTree::Ident(id) => id == word,
        TokenTree::Group(group) => mentions(group.stream(), word),
        _ => false,
    })
}

/// `where Self: Sized` keeps a method off the trait object.
fn requires_sized(sig: &Signature) -> bool {
    sig.generics.where_clause.as_ref().is_some_and(|clause| {
        clause.predicates.iter().any(|predicate| match predicate {
            WherePredicate::Type(pred) => {
                matches!(&pred.bounded_ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident("Self"))
                    && pred.bounds.iter().any(|bound| {
                        matches!(bound, TypeParamBound::Trait(t)
                            if matches!(t.modifier, TraitBoundModifier::None)
                                && t.path.segments.last().is_some_and(|seg| seg.ident == "Sized"))
                    })
            }
            _ => false,
        })
    })
}

/// Why a provided method would stop the trait from being used as `dyn Trait`.
fn dispatch_problem(sig: &Signature) -> Option<(Span, &'static str)> {
    if requires_sized(sig) {
        return None;
    }
    if let Some(param) = sig
        .generics
        .params
        .iter()
        .find(|param| !matches!(param, GenericParam::Lifetime(_)))
    {
        return Some((param.span(), "generic type parameters"));
    }
    if !matches!(sig.inputs.first(), Some(FnArg::Receiver(_))) {
        return Some((sig.ident.span(), "no `self` receiver"));
    }
    if let Some(a) = &sig.asyncness {
        return Some((a.span, "an `async` qualifier"));
    }
    let typed = sig.inputs.iter().filter_map(|arg| match arg {
        FnArg::Typed(typed) => Some(typed.ty.to_token_stream()),
        FnArg::Receiver(_) => None,
    });
    let output = match &sig.output {
        ReturnType::Type(_, ty) => Some(ty.to_token_stream()),
        ReturnType::Default => None,
    };
    for tks in typed.chain(output) {
        if mentions(tks.clone(), "impl") {
            return Some((tks.span(), "an `impl Trait` type"));
        }
        if mentions(tks.clone(), "Self") {
            return Some((tks.span(), "`Self` in its parameters or return type"));
        }
    }
    None
}

fn extract_parameters(sig: &Signature) -> Result<Vec<ParameterDescriptor>, LinkedList<CompileError>> {
    let method = &sig.ident;
    let mut inputs = sig.inputs.iter();
    let receiver_ok = matches!(
        inputs.next(),
        Some(FnArg::Receiver(r)) if r.reference.is_some() && r.colon_token.is_none()
    );
    let receiver = if receiver_ok {
        Ok(())
    } else {
        Err(singlelist(CompileError::BadReceiver {
            method: method.clone(),
            span: sig.inputs.first().map_or(sig.ident.span(), |arg| arg.span()),
        }))
    };

    let params = collect_all(inputs.map(|arg| match arg {
        FnArg::Typed(typed) => match typed.pat.as_ref() {
            Pat::Ident(id) if id.by_ref.is_none() && id.subpat.is_none() => {
                resolve_parameter(&typed.ty)
                    .map(|(_, tag)| ParameterDescriptor {
                        name: id.ident.clone(),
                        tag,
                    })
                    .map_err(|reason| {
                        singlelist(CompileError::UnsupportedParameter {
                            method: method.clone(),
                            param: id.ident.clone(),
                            ty: typed.ty.to_token_stream().to_string(),
                            span: typed.ty.span(),
                            reason,
                        })
                    })
            }
            pat => Err(singlelist(CompileError::PatternParameter {
                method: method.clone(),
                span: pat.span(),
            })),
        },
        FnArg::Receiver(r) => Err(singlelist(CompileError::BadReceiver {
            method: method.clone(),
            span: r.span(),
        })),
    }));

    match (receiver, params) {
        (Ok(()), Ok(params)) => Ok(params),
        (Err(mut e1), Err(mut e2)) => {
            e1.append(&mut e2);
            Err(e1)
        }
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

fn extract_query(
    method: &Ident,
    queries: &[Attribute],
) -> Result<LitStr, LinkedList<CompileError>> {
    let [query, rest @ ..] = queries else {
        unreachable!("only called with at least one query attribute")
    };
    let mut errors: LinkedList<CompileError> = rest
        .iter()
        .map(|dup| CompileError::DuplicateQuery {
            method: method.clone(),
            span: dup.span(),
            previous: query.span(),
        })
        .collect();
    match query.parse_args::<LitStr>() {
        Ok(lit) if lit.value().trim().is_empty() => errors.push_back(CompileError::EmptyQuery {
            method: method.clone(),
            span: lit.span(),
        }),
        Ok(lit) if errors.is_empty() => return Ok(lit),
        Ok(_) => (),
        Err(e) => errors.push_back(CompileError::BadAttribute(e)),
    }
    Err(errors)
}

fn extract_method(
    interface: &Ident,
    method: &mut TraitItemFn,
) -> Option<Result<MethodDescriptor, LinkedList<CompileError>>> {
    let queries = take_queries(&mut method.attrs);
    let name = method.sig.ident.clone();

    if queries.is_empty() {
        // provided methods need no implementation, but must not prevent `dyn`
        return match method.default {
            Some(_) => dispatch_problem(&method.sig).map(|(span, feature)| {
                Err(singlelist(CompileError::UndispatchableMethod {
                    interface: interface.clone(),
                    method: name,
                    span,
                    feature,
                }))
            }),
            None => Some(Err(singlelist(CompileError::MissingQuery {
                interface: interface.clone(),
                method: name,
            }))),
        };
    }

    let mut errors = check_signature(&method.sig);
    if let Some(body) = &method.default {
        errors.push_back(CompileError::QueryWithBody {
            method: name.clone(),
            span: body.span(),
        });
    }
    let query = extract_query(&name, &queries);
    let params = extract_parameters(&method.sig);

    Some(match (query, params) {
        (Ok(query), Ok(params)) if errors.is_empty() => Ok(MethodDescriptor {
            name,
            signature: method.sig.clone(),
            params,
            output: method.sig.output.clone(),
            query,
        }),
        (query, params) => {
            if let Err(mut es) = query {
                errors.append(&mut es);
            }
            if let Err(mut es) = params {
                errors.append(&mut es);
            }
            Err(errors)
        }
    })
}

/// Extract the descriptor of a marked trait, returning the trait with its
/// markers removed alongside.
pub fn extract_interface(
    mut item: ItemTrait,
) -> (ItemTrait, Result<InterfaceDescriptor, LinkedList<CompileError>>) {
    let mut errors = check_trait(&item);
    let interface = item.ident.clone();

    let methods = collect_all(item.items.iter_mut().filter_map(|trait_item| match trait_item {
        TraitItem::Fn(method) => extract_method(&interface, method),
        other => Some(Err(singlelist(CompileError::UnsupportedItem {
            interface: interface.clone(),
            span: other.span(),
        }))),
    }));

    let descriptor = match methods {
        Ok(methods) if errors.is_empty() => Ok(InterfaceDescriptor {
            name: interface,
            vis: item.vis.clone(),
            methods,
        }),
        Ok(_) => Err(errors),
        Err(mut es) => {
            errors.append(&mut es);
            Err(errors)
        }
    };
    (item, descriptor)
}
