//! Parsing of `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Sets a flag, rejecting a repeated one.
fn set_flag(slot: &mut Option<Span>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate flag"));
    }
    *slot = Some(meta.path.require_ident()?.span());
    Ok(())
}

/// Parses `formerly = "..."`, rejecting an empty name.
fn parse_formerly(meta: &ParseNestedMeta, list: &mut Vec<LitStr>) -> syn::Result<()> {
    let lit: LitStr = meta.value()?.parse()?;
    if lit.value().trim().is_empty() {
        return Err(syn::Error::new(lit.span(), "`formerly` needs a non-empty name"));
    }
    list.push(lit);
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the type itself.
///
/// - `type_path = "a::b::C"`: pins the stable type tag.
/// - `formerly = "old::Path"`: a former type tag, repeatable.
/// - `hooks`: calls `SerializationHooks` around encoding and decoding.
/// - `auto_register`: collect the type for `TypeRegistry::auto_register`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub type_path: Option<LitStr>,
    pub formerly: Vec<LitStr>,
    pub hooks: Option<Span>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if res.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path`"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    validate_type_path(&lit)?;
                    res.type_path = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("formerly") {
                    parse_formerly(&meta, &mut res.formerly)
                } else if meta.path.is_ident("hooks") {
                    set_flag(&mut res.hooks, &meta)
                } else if meta.path.is_ident("auto_register") {
                    set_flag(&mut res.auto_register, &meta)
                } else {
                    Err(meta.error(
                        "unknown type attribute, expected `type_path`, `formerly`, `hooks` or `auto_register`",
                    ))
                }
            })?;
        }

        Ok(res)
    }
}

fn validate_type_path(lit: &LitStr) -> syn::Result<()> {
    let value = lit.value();
    let valid = !value.is_empty()
        && !value.starts_with("::")
        && !value.ends_with("::")
        && !value.chars().any(char::is_whitespace);
    if valid {
        Ok(())
    } else {
        Err(syn::Error::new(
            lit.span(),
            "`type_path` must look like `module::Name`, without leading `::` or spaces",
        ))
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes on a named field.
///
/// - `skip`: never serialized, even when `pub`.
/// - `serialize`: serialized even when private.
/// - `formerly = "old"`: a former field name, repeatable.
/// - `base`: the embedded base composite, whose fields are inherited.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub skip: Option<Span>,
    pub serialize: Option<Span>,
    pub formerly: Vec<LitStr>,
    pub base: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    set_flag(&mut res.skip, &meta)
                } else if meta.path.is_ident("serialize") {
                    set_flag(&mut res.serialize, &meta)
                } else if meta.path.is_ident("formerly") {
                    parse_formerly(&meta, &mut res.formerly)
                } else if meta.path.is_ident("base") {
                    set_flag(&mut res.base, &meta)
                } else {
                    Err(meta.error(
                        "unknown field attribute, expected `skip`, `serialize`, `formerly` or `base`",
                    ))
                }
            })?;
        }

        if let (Some(span), Some(_)) = (res.skip, res.serialize) {
            return Err(syn::Error::new(span, "`skip` conflicts with `serialize`"));
        }
        if let Some(span) = res.base
            && (res.skip.is_some() || res.serialize.is_some() || !res.formerly.is_empty())
        {
            return Err(syn::Error::new(
                span,
                "`base` cannot be combined with other field attributes",
            ));
        }

        Ok(res)
    }
}
