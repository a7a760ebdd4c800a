//! # Type Compatibility
//! Decides which declared Rust types can be bound as query parameters, and
//! which can be extracted from a query result.
//! - Declared types are classified once into a [`ValueType`], all further
//!   decisions are total matches over the enumerations below.
//! - Classification is syntactic (by the last path segment), so `NaiveDate`
//!   and `chrono::NaiveDate` are the same type.

use itertools::Itertools;
use proc_macro2::Span;
use quote::format_ident;
use syn::{GenericArgument, Ident, PathArguments, PathSegment, ReturnType, Type};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Bool,
    String,
    /// A borrowed `&str`, only usable as a parameter.
    Str,
    Date,
    Time,
    DateTime,
    Instant,
    OffsetDateTime,
    Blob,
    /// Any SQLite value (`dbx::Value`).
    Value,
}

/// The type descriptor sent with a bound parameter, mirrors `dbx::WireTag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireTag {
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Double,
    Boolean,
    Varchar,
    Date,
    Time,
    Timestamp,
    TimestampWithTimezone,
}

/// A typed accessor on `dbx::ResultSource`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extraction {
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
    String,
    Date,
    Time,
    DateTime,
    Instant,
    OffsetDateTime,
    Blob,
    Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    List,
    Set,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnShape {
    Void,
    Cursor,
    Scalar(ValueType),
    Collection {
        kind: ContainerKind,
        element: ValueType,
    },
}

/// How an execution failure reaches the caller of a generated method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureMode {
    /// Declared as `T`, failures panic.
    Unchecked,
    /// Declared as `Result<T, E>`, failures are converted into `E`.
    Propagate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReturnDescriptor {
    pub shape: ReturnShape,
    pub failure: FailureMode,
}

/// Why a type was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsupported {
    Unknown,
    NestedContainer,
    ContainerElement,
    SetElement(ValueType),
    ParameterOnly,
    ReturnOnly,
    NestedResult,
}

impl Unsupported {
    pub fn help(&self) -> String {
        match self {
            Unsupported::Unknown => format!(
                "Supported value types are {}",
                SCALAR_NAMES
                    .iter()
                    .map(|(name, _)| *name)
                    .chain(["DateTime<Utc>", "DateTime<FixedOffset>", "Vec<u8>"])
                    .join(", ")
            ),
            Unsupported::NestedContainer => {
                "Only a single level of `Vec`, `VecDeque`, `HashSet` or `BTreeSet` is supported"
                    .to_owned()
            }
            Unsupported::ContainerElement => {
                "Container elements must be a supported scalar, date/time or SQL value type"
                    .to_owned()
            }
            Unsupported::SetElement(element) => format!(
                "Set elements need total equality, `{element:?}` values cannot be collected into a set"
            ),
            Unsupported::ParameterOnly => {
                "Borrowed strings can only be parameters, return a `String` instead".to_owned()
            }
            Unsupported::ReturnOnly => {
                "Parameters must be a scalar, `&str` or date/time type".to_owned()
            }
            Unsupported::NestedResult => "Only one level of `Result` is supported".to_owned(),
        }
    }
}

const SCALAR_NAMES: &[(&str, ValueType)] = &[
    ("i8", ValueType::Byte),
    ("i16", ValueType::Short),
    ("i32", ValueType::Int),
    ("i64", ValueType::Long),
    ("f32", ValueType::Float),
    ("f64", ValueType::Double),
    ("bool", ValueType::Bool),
    ("String", ValueType::String),
    ("NaiveDate", ValueType::Date),
    ("NaiveTime", ValueType::Time),
    ("NaiveDateTime", ValueType::DateTime),
    ("Value", ValueType::Value),
];

const TIMEZONE_NAMES: &[(&str, ValueType)] = &[
    ("Utc", ValueType::Instant),
    ("FixedOffset", ValueType::OffsetDateTime),
];

const CONTAINER_NAMES: &[(&str, ContainerKind)] = &[
    ("Vec", ContainerKind::List),
    ("VecDeque", ContainerKind::List),
    ("HashSet", ContainerKind::Set),
    ("BTreeSet", ContainerKind::Set),
];

const CURSOR_NAME: &str = "ResultSet";
const RESULT_NAME: &str = "Result";

fn lookup<T: Copy>(table: &[(&str, T)], ident: &Ident) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| ident == name)
        .map(|(_, value)| *value)
}

/// Strips the invisible groups introduced by `macro_rules!` and parentheses.
fn strip(ty: &Type) -> &Type {
    match ty {
        Type::Group(g) => strip(&g.elem),
        Type::Paren(p) => strip(&p.elem),
        other => other,
    }
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    match strip(ty) {
        Type::Path(p) if p.qself.is_none() => p.path.segments.last(),
        _ => None,
    }
}

fn generic_args(seg: &PathSegment) -> Vec<&Type> {
    match &seg.arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn is_plain(seg: &PathSegment, name: &str) -> bool {
    seg.ident == name && seg.arguments.is_none()
}

fn container_of(ty: &Type) -> Option<(ContainerKind, &Type)> {
    let seg = last_segment(ty)?;
    let kind = lookup(CONTAINER_NAMES, &seg.ident)?;
    match generic_args(seg).as_slice() {
        [element] => Some((kind, *element)),
        _ => None,
    }
}

fn is_blob(ty: &Type) -> bool {
    match last_segment(ty) {
        Some(seg) if seg.ident == "Vec" => matches!(
            generic_args(seg).as_slice(),
            [element] if last_segment(element).is_some_and(|e| is_plain(e, "u8"))
        ),
        _ => false,
    }
}

/// Classify a type as a single value, `None` for containers, cursors and
/// anything unknown.
pub fn classify(ty: &Type) -> Option<ValueType> {
    if let Type::Reference(r) = strip(ty) {
        return match last_segment(&r.elem) {
            Some(seg) if r.mutability.is_none() && is_plain(seg, "str") => Some(ValueType::Str),
            _ => None,
        };
    }
    if is_blob(ty) {
        return Some(ValueType::Blob);
    }
    let seg = last_segment(ty)?;
    if seg.arguments.is_none() {
        lookup(SCALAR_NAMES, &seg.ident)
    } else if seg.ident == "DateTime" {
        match generic_args(seg).as_slice() {
            [tz] => last_segment(tz)
                .filter(|tz| tz.arguments.is_none())
                .and_then(|tz| lookup(TIMEZONE_NAMES, &tz.ident)),
            _ => None,
        }
    } else {
        None
    }
}

impl ValueType {
    /// Values that can be collected into a `HashSet` or `BTreeSet`.
    pub fn has_total_eq(&self) -> bool {
        !matches!(
            self,
            ValueType::Float | ValueType::Double | ValueType::Value | ValueType::Str
        )
    }
}

/// The binding table.
pub fn resolve_binding_type(value: ValueType) -> Option<WireTag> {
    match value {
        ValueType::Byte => Some(WireTag::TinyInt),
        ValueType::Short => Some(WireTag::SmallInt),
        ValueType::Int => Some(WireTag::Integer),
        ValueType::Long => Some(WireTag::BigInt),
        ValueType::Float => Some(WireTag::Float),
        ValueType::Double => Some(WireTag::Double),
        ValueType::Bool => Some(WireTag::Boolean),
        ValueType::String | ValueType::Str => Some(WireTag::Varchar),
        ValueType::Date => Some(WireTag::Date),
        ValueType::Time => Some(WireTag::Time),
        ValueType::DateTime | ValueType::Instant => Some(WireTag::Timestamp),
        ValueType::OffsetDateTime => Some(WireTag::TimestampWithTimezone),
        ValueType::Blob | ValueType::Value => None,
    }
}

/// The extraction table.
pub fn resolve_extraction(value: ValueType) -> Option<Extraction> {
    match value {
        ValueType::Byte => Some(Extraction::I8),
        ValueType::Short => Some(Extraction::I16),
        ValueType::Int => Some(Extraction::I32),
        ValueType::Long => Some(Extraction::I64),
        ValueType::Float => Some(Extraction::F32),
        ValueType::Double => Some(Extraction::F64),
        ValueType::Bool => Some(Extraction::Bool),
        ValueType::String => Some(Extraction::String),
        ValueType::Date => Some(Extraction::Date),
        ValueType::Time => Some(Extraction::Time),
        ValueType::DateTime => Some(Extraction::DateTime),
        ValueType::Instant => Some(Extraction::Instant),
        ValueType::OffsetDateTime => Some(Extraction::OffsetDateTime),
        ValueType::Blob => Some(Extraction::Blob),
        ValueType::Value => Some(Extraction::Value),
        ValueType::Str => None,
    }
}

impl WireTag {
    /// The variant of `dbx::WireTag` to emit.
    pub fn variant(&self) -> Ident {
        Ident::new(&format!("{self:?}"), Span::call_site())
    }
}

impl Extraction {
    /// The `dbx::ResultSource` method performing the extraction.
    pub fn accessor(&self) -> Ident {
        let suffix = match self {
            Extraction::I8 => "i8",
            Extraction::I16 => "i16",
            Extraction::I32 => "i32",
            Extraction::I64 => "i64",
            Extraction::F32 => "f32",
            Extraction::F64 => "f64",
            Extraction::Bool => "bool",
            Extraction::String => "string",
            Extraction::Date => "date",
            Extraction::Time => "time",
            Extraction::DateTime => "datetime",
            Extraction::Instant => "instant",
            Extraction::OffsetDateTime => "offset_datetime",
            Extraction::Blob => "blob",
            Extraction::Value => "value",
        };
        format_ident!("get_{suffix}")
    }
}

/// The compound table, one level of nesting only.
impl ContainerKind {
    /// The `dbx::materialize` function draining a result into this container.
    pub fn materializer(&self) -> Ident {
        match self {
            ContainerKind::List => format_ident!("to_list"),
            ContainerKind::Set => format_ident!("to_set"),
        }
    }
}

/// Resolve a parameter's declared type to its value type and wire tag.
pub fn resolve_parameter(ty: &Type) -> Result<(ValueType, WireTag), Unsupported> {
    match classify(ty) {
        Some(value) => resolve_binding_type(value)
            .map(|tag| (value, tag))
            .ok_or(Unsupported::ReturnOnly),
        None if container_of(ty).is_some() || is_cursor(ty) => Err(Unsupported::ReturnOnly),
        None => Err(Unsupported::Unknown),
    }
}

fn is_cursor(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|seg| is_plain(seg, CURSOR_NAME))
}

fn is_unit(ty: &Type) -> bool {
    matches!(strip(ty), Type::Tuple(t) if t.elems.is_empty())
}

fn resolve_shape(ty: &Type) -> Result<ReturnShape, Unsupported> {
    if is_unit(ty) {
        return Ok(ReturnShape::Void);
    }
    if is_cursor(ty) {
        return Ok(ReturnShape::Cursor);
    }
    if let Some(value) = classify(ty) {
        return resolve_extraction(value)
            .map(|_| ReturnShape::Scalar(value))
            .ok_or(Unsupported::ParameterOnly);
    }
    if let Some((kind, element)) = container_of(ty) {
        if container_of(element).is_some() && !is_blob(element) {
            return Err(Unsupported::NestedContainer);
        }
        let element = classify(element)
            .filter(|e| resolve_extraction(*e).is_some())
            .ok_or(Unsupported::ContainerElement)?;
        if kind == ContainerKind::Set && !element.has_total_eq() {
            return Err(Unsupported::SetElement(element));
        }
        return Ok(ReturnShape::Collection { kind, element });
    }
    Err(Unsupported::Unknown)
}

/// The type inside a `Result<T>` or `Result<T, E>`.
fn result_inner(ty: &Type) -> Option<&Type> {
    let seg = last_segment(ty)?;
    if seg.ident != RESULT_NAME {
        return None;
    }
    match generic_args(seg).as_slice() {
        [ok] | [ok, _] => Some(*ok),
        _ => None,
    }
}

/// Resolve a method's declared return type.
pub fn resolve_return(ret: &ReturnType) -> Result<ReturnDescriptor, Unsupported> {
    let ty = match ret {
        ReturnType::Default => {
            return Ok(ReturnDescriptor {
                shape: ReturnShape::Void,
                failure: FailureMode::Unchecked,
            })
        }
        ReturnType::Type(_, ty) => ty.as_ref(),
    };
    match result_inner(ty) {
        Some(inner) if result_inner(inner).is_some() => Err(Unsupported::NestedResult),
        Some(inner) => Ok(ReturnDescriptor {
            shape: resolve_shape(inner)?,
            failure: FailureMode::Propagate,
        }),
        None => Ok(ReturnDescriptor {
            shape: resolve_shape(ty)?,
            failure: FailureMode::Unchecked,
        }),
    }
}
