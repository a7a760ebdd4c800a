//! # dbx Error Messages
//! Every problem found while compiling a batch, each with a code for easy
//! reference in bug reports.
//! - [`ErrorKind::UnsupportedType`] errors name the offending type.
//! - [`ErrorKind::MalformedDeclaration`] errors are about the shape of the
//!   declarations themselves.

use crate::types::Unsupported;
use proc_macro2::Span;
use proc_macro_error2::{Diagnostic, Level};
use syn::Ident;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedType,
    MalformedDeclaration,
}

#[derive(Debug)]
pub enum CompileError {
    UnsupportedParameter {
        method: Ident,
        param: Ident,
        ty: String,
        span: Span,
        reason: Unsupported,
    },
    UnsupportedReturn {
        method: Ident,
        ty: String,
        span: Span,
        reason: Unsupported,
    },
    MarkerOnNonTrait {
        marker: Span,
        item: &'static str,
    },
    MissingQuery {
        interface: Ident,
        method: Ident,
    },
    EmptyQuery {
        method: Ident,
        span: Span,
    },
    DuplicateQuery {
        method: Ident,
        span: Span,
        previous: Span,
    },
    QueryWithBody {
        method: Ident,
        span: Span,
    },
    UnsupportedTrait {
        interface: Ident,
        span: Span,
        feature: &'static str,
    },
    UnsupportedMethod {
        method: Ident,
        span: Span,
        feature: &'static str,
    },
    UnsupportedItem {
        interface: Ident,
        span: Span,
    },
    BadReceiver {
        method: Ident,
        span: Span,
    },
    PatternParameter {
        method: Ident,
        span: Span,
    },
    BadAttribute(syn::Error),
    DebugOutput {
        span: Span,
        message: String,
    },
    UndispatchableMethod {
        interface: Ident,
        method: Ident,
        span: Span,
        feature: &'static str,
    },
}

impl CompileError {
    pub fn code(&self) -> usize {
        match self {
            CompileError::UnsupportedParameter { .. } => 0,
            CompileError::UnsupportedReturn { .. } => 1,
            CompileError::MarkerOnNonTrait { .. } => 2,
            CompileError::MissingQuery { .. } => 3,
            CompileError::EmptyQuery { .. } => 4,
            CompileError::DuplicateQuery { .. } => 5,
            CompileError::QueryWithBody { .. } => 6,
            CompileError::UnsupportedTrait { .. } => 7,
            CompileError::UnsupportedMethod { .. } => 8,
            CompileError::UnsupportedItem { .. } => 9,
            CompileError::BadReceiver { .. } => 10,
            CompileError::PatternParameter { .. } => 11,
            CompileError::BadAttribute(_) => 12,
            CompileError::DebugOutput { .. } => 13,
            CompileError::UndispatchableMethod { .. } => 14,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::UnsupportedParameter { .. } | CompileError::UnsupportedReturn { .. } => {
                ErrorKind::UnsupportedType
            }
            _ => ErrorKind::MalformedDeclaration,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            CompileError::UnsupportedParameter { span, .. }
            | CompileError::UnsupportedReturn { span, .. }
            | CompileError::EmptyQuery { span, .. }
            | CompileError::DuplicateQuery { span, .. }
            | CompileError::QueryWithBody { span, .. }
            | CompileError::UnsupportedTrait { span, .. }
            | CompileError::UnsupportedMethod { span, .. }
            | CompileError::UnsupportedItem { span, .. }
            | CompileError::BadReceiver { span, .. }
            | CompileError::PatternParameter { span, .. }
            | CompileError::DebugOutput { span, .. }
            | CompileError::UndispatchableMethod { span, .. } => *span,
            CompileError::MarkerOnNonTrait { marker, .. } => *marker,
            CompileError::MissingQuery { method, .. } => method.span(),
            CompileError::BadAttribute(e) => e.span(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            CompileError::UnsupportedParameter {
                method, param, ty, ..
            } => format!("Unsupported type `{ty}` for parameter `{param}` of `{method}`"),
            CompileError::UnsupportedReturn { method, ty, .. } => {
                format!("Unsupported return type `{ty}` for `{method}`")
            }
            CompileError::MarkerOnNonTrait { item, .. } => {
                format!("`#[dao]` can only be used on traits, not on {item}")
            }
            CompileError::MissingQuery { interface, method } => format!(
                "Method `{method}` of `{interface}` has no `#[query(\"...\")]`"
            ),
            CompileError::EmptyQuery { method, .. } => {
                format!("The query of `{method}` is empty")
            }
            CompileError::DuplicateQuery { method, .. } => {
                format!("`{method}` has more than one `#[query(...)]`")
            }
            CompileError::QueryWithBody { method, .. } => {
                format!("`{method}` has a `#[query(...)]` and a default body")
            }
            CompileError::UnsupportedTrait {
                interface, feature, ..
            } => format!("`{interface}` cannot be generated, it has {feature}"),
            CompileError::UnsupportedMethod {
                method, feature, ..
            } => format!("`{method}` cannot be generated, it has {feature}"),
            CompileError::UnsupportedItem { interface, .. } => {
                format!("`{interface}` can only contain methods")
            }
            CompileError::BadReceiver { method, .. } => {
                format!("`{method}` must take `&self` or `&mut self`")
            }
            CompileError::PatternParameter { method, .. } => {
                format!("Parameters of `{method}` must be plain identifiers")
            }
            CompileError::BadAttribute(e) => e.to_string(),
            CompileError::DebugOutput { message, .. } => message.clone(),
            CompileError::UndispatchableMethod {
                interface,
                method,
                feature,
                ..
            } => format!(
                "`{method}` has {feature}, so `{interface}` cannot be used as `dyn {interface}`"
            ),
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            CompileError::UnsupportedParameter { reason, .. }
            | CompileError::UnsupportedReturn { reason, .. } => Some(reason.help()),
            CompileError::MarkerOnNonTrait { .. } => {
                Some("Declare the data access interface as a `trait`".to_owned())
            }
            CompileError::MissingQuery { .. } => Some(
                "Annotate the method with its query, or give it a default body".to_owned(),
            ),
            CompileError::QueryWithBody { .. } => {
                Some("Remove the body, the implementation is generated".to_owned())
            }
            CompileError::PatternParameter { .. } => {
                Some("Parameters are bound by position, e.g. `id: i64`".to_owned())
            }
            CompileError::UndispatchableMethod { .. } => Some(
                "Add `where Self: Sized` to the method to leave it out of the trait object"
                    .to_owned(),
            ),
            _ => None,
        }
    }
}

impl From<CompileError> for Diagnostic {
    fn from(err: CompileError) -> Self {
        let diag = Diagnostic::spanned(
            err.span(),
            Level::Error,
            format!("[DBX-{}] {}", err.code(), err.message()),
        );
        let diag = match &err {
            CompileError::DuplicateQuery { previous, .. } => {
                diag.span_note(*previous, "First query given here".to_owned())
            }
            _ => diag,
        };
        match err.help() {
            Some(help) => diag.help(help),
            None => diag,
        }
    }
}
