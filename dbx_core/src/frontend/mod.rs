//! # [dbx](crate) frontend
//! Parses the tokens of one `daos!` invocation (a batch) and sorts its items
//! into those passed through untouched and the marked traits to generate.
//!
//! ```text
//! impl user_db { pub = on, debug_file = "user_db.rs" };
//!
//! #[dao]
//! pub trait UserDao {
//!     #[query("SELECT id FROM users")]
//!     fn get_user_ids(&self) -> Vec<i32>;
//! }
//! ```

pub mod errors;
pub mod extract;

use errors::CompileError;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    token, Attribute, Ident, Item, ItemTrait, LitStr, Meta, Token,
};

pub const DAO_MARKER: &str = "dao";
pub const QUERY_MARKER: &str = "query";

pub struct BatchOptions {
    pub public: bool,
    pub debug_file: Option<LitStr>,
}

pub struct Batch {
    pub name: Ident,
    pub options: BatchOptions,
    pub items: Vec<Item>,
}

enum OptionValue {
    Switch(bool),
    Path(LitStr),
}

struct BatchOption {
    key: Ident,
    value: OptionValue,
}

impl Parse for BatchOption {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key = if input.peek(Token![pub]) {
            let kw: Token![pub] = input.parse()?;
            Ident::new("pub", kw.span)
        } else {
            input.parse()?
        };
        input.parse::<Token![=]>()?;
        let value = if input.peek(LitStr) {
            OptionValue::Path(input.parse()?)
        } else {
            let switch: Ident = input.parse()?;
            if switch == "on" {
                OptionValue::Switch(true)
            } else if switch == "off" {
                OptionValue::Switch(false)
            } else {
                return Err(syn::Error::new(switch.span(), "Expected `on` or `off`"));
            }
        };
        Ok(Self { key, value })
    }
}

fn parse_options(input: ParseStream) -> syn::Result<BatchOptions> {
    let mut options = BatchOptions {
        public: false,
        debug_file: None,
    };
    if !input.peek(token::Brace) {
        return Ok(options);
    }
    let content;
    syn::braced!(content in input);
    let mut seen: Vec<Ident> = Vec::new();
    for BatchOption { key, value } in
        Punctuated::<BatchOption, Token![,]>::parse_terminated(&content)?
    {
        if let Some(prev) = seen.iter().find(|prev| **prev == key) {
            let mut err = syn::Error::new(key.span(), format!("Option `{key}` given twice"));
            err.combine(syn::Error::new(prev.span(), "First given here"));
            return Err(err);
        }
        match (key.to_string().as_str(), value) {
            ("pub", OptionValue::Switch(public)) => options.public = public,
            ("debug_file", OptionValue::Path(path)) => options.debug_file = Some(path),
            ("pub", OptionValue::Path(path)) => {
                return Err(syn::Error::new(path.span(), "Expected `on` or `off`"))
            }
            ("debug_file", OptionValue::Switch(_)) => {
                return Err(syn::Error::new(key.span(), "Expected a file path"))
            }
            _ => {
                return Err(syn::Error::new(
                    key.span(),
                    format!("Unknown option `{key}`, available options are `pub` and `debug_file`"),
                ))
            }
        }
        seen.push(key);
    }
    Ok(options)
}

impl Parse for Batch {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if !input.peek(Token![impl]) {
            return Err(input.error("Expected the batch header `impl <module name>;`"));
        }
        input.parse::<Token![impl]>()?;
        let name: Ident = input.parse()?;
        let options = parse_options(input)?;
        input.parse::<Token![;]>()?;
        let mut items = Vec::new();
        while !input.is_empty() {
            items.push(input.parse()?);
        }
        Ok(Self {
            name,
            options,
            items,
        })
    }
}

/// A batch item after marker inspection.
pub enum Declaration {
    Passthrough(Item),
    Interface(ItemTrait),
    /// Marked, but not a trait. The marker is removed from the item.
    Misplaced(Item, CompileError),
}

pub fn is_marker(attr: &Attribute, name: &str) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|seg| seg.ident == name)
}

fn take_marker(attrs: &mut Vec<Attribute>) -> Option<Attribute> {
    let pos = attrs.iter().position(|attr| {
        is_marker(attr, DAO_MARKER) && matches!(attr.meta, Meta::Path(_))
    })?;
    Some(attrs.remove(pos))
}

fn item_attrs(item: &mut Item) -> Option<&mut Vec<Attribute>> {
    match item {
        Item::Const(i) => Some(&mut i.attrs),
        Item::Enum(i) => Some(&mut i.attrs),
        Item::ExternCrate(i) => Some(&mut i.attrs),
        Item::Fn(i) => Some(&mut i.attrs),
        Item::ForeignMod(i) => Some(&mut i.attrs),
        Item::Impl(i) => Some(&mut i.attrs),
        Item::Macro(i) => Some(&mut i.attrs),
        Item::Mod(i) => Some(&mut i.attrs),
        Item::Static(i) => Some(&mut i.attrs),
        Item::Struct(i) => Some(&mut i.attrs),
        Item::Trait(i) => Some(&mut i.attrs),
        Item::TraitAlias(i) => Some(&mut i.attrs),
        Item::Type(i) => Some(&mut i.attrs),
        Item::Union(i) => Some(&mut i.attrs),
        Item::Use(i) => Some(&mut i.attrs),
        _ => None,
    }
}

fn item_kind(item: &Item) -> &'static str {
    match item {
        Item::Const(_) => "a constant",
        Item::Enum(_) => "an enum",
        Item::ExternCrate(_) => "an extern crate",
        Item::Fn(_) => "a function",
        Item::ForeignMod(_) => "an extern block",
        Item::Impl(_) => "an impl block",
        Item::Macro(_) => "a macro invocation",
        Item::Mod(_) => "a module",
        Item::Static(_) => "a static",
        Item::Struct(_) => "a struct",
        Item::TraitAlias(_) => "a trait alias",
        Item::Type(_) => "a type alias",
        Item::Union(_) => "a union",
        Item::Use(_) => "a use declaration",
        _ => "this item",
    }
}

/// Sort the batch items by their `#[dao]` marker.
pub fn declarations(items: Vec<Item>) -> Vec<Declaration> {
    items
        .into_iter()
        .map(|mut item| {
            let kind = item_kind(&item);
            let marker = item_attrs(&mut item).and_then(take_marker);
            match (marker, item) {
                (None, item) => Declaration::Passthrough(item),
                (Some(_), Item::Trait(t)) => Declaration::Interface(t),
                (Some(marker), item) => Declaration::Misplaced(
                    item,
                    CompileError::MarkerOnNonTrait {
                        marker: marker.path().span(),
                        item: kind,
                    },
                ),
            }
        })
        .collect()
}
