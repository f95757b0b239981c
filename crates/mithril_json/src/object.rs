//! Composites and `Box<dyn Reflect>` slots, as type-tagged wrapper objects.
//!
//! ```text
//! {"TYPE":"game::Pawn","DATA":{"name":"Ada","health":3}}
//! ```
//!
//! A composite with no fields is written as `{}` and decodes to the default
//! instance of the slot's declared type. A `Box<dyn Reflect>` slot always
//! writes the wrapper, because only the tag can name the held type; a held
//! value that is not a composite becomes the `DATA` entry as is.

use alloc::boxed::Box;
use alloc::string::String;

use mithril_reflect::Reflect;
use mithril_reflect::info::{CompositeInfo, TypeInfo};
use mithril_reflect::ops::{Composite, ReflectMut, ReflectRef};
use mithril_reflect::registry::{TypeMeta, TypeTraitDefault};

use crate::writer::Writer;
use crate::{DecodeError, EncodeError, Translator, escape, scan};

/// Key of the type tag entry.
pub const TYPE_KEY: &str = "TYPE";
/// Key of the field map entry.
pub const DATA_KEY: &str = "DATA";

// -----------------------------------------------------------------------------
// Encode

fn encode_fields(
    translator: &Translator<'_>,
    composite: &dyn Composite,
    info: &CompositeInfo,
    w: &mut Writer<'_>,
) -> Result<(), EncodeError> {
    w.open('{');
    for (index, field) in info.iter().enumerate() {
        let value = composite
            .field(field.name())
            .ok_or_else(|| EncodeError::MissingField {
                field: field.name().into(),
                type_path: info.type_path().into(),
            })?;
        w.item(index);
        w.key(field.name());
        translator.encode_value(value, w)?;
    }
    w.close('}', info.field_len());
    Ok(())
}

fn composite_info_of(composite: &dyn Composite) -> Result<&'static CompositeInfo, EncodeError> {
    composite
        .composite_info()
        .ok_or_else(|| EncodeError::UnsupportedShape {
            type_path: composite.reflect_type_path().into(),
        })
}

pub(crate) fn encode_composite(
    translator: &Translator<'_>,
    composite: &dyn Composite,
    w: &mut Writer<'_>,
) -> Result<(), EncodeError> {
    let info = composite_info_of(composite)?;
    if info.is_empty() {
        w.push_str("{}");
        return Ok(());
    }
    encode_tagged(translator, composite, w)
}

/// Writes the wrapper for any value, composite or not.
pub(crate) fn encode_tagged(
    translator: &Translator<'_>,
    value: &dyn Reflect,
    w: &mut Writer<'_>,
) -> Result<(), EncodeError> {
    w.open('{');
    w.item(0);
    w.key(TYPE_KEY);
    escape::write_quoted_str(w.out(), value.reflect_type_path());
    w.item(1);
    w.key(DATA_KEY);
    match value.reflect_ref() {
        ReflectRef::Composite(composite) => {
            let info = composite_info_of(composite)?;
            encode_fields(translator, composite, info, w)?;
        }
        _ => translator.encode_value(value, w)?,
    }
    w.close('}', 2);
    Ok(())
}

// -----------------------------------------------------------------------------
// Decode

fn parse_key(text: &str, owner: &str) -> Result<String, DecodeError> {
    escape::decode_str(text).map_err(|err| DecodeError::format(text, owner, err))
}

fn split_key_value<'t>(entry: &'t str, owner: &str) -> Result<(String, &'t str), DecodeError> {
    let (key, value) = scan::split_entry(entry)
        .ok_or_else(|| DecodeError::format(entry, owner, "expected `\"key\": value`"))?;
    Ok((parse_key(key, owner)?, value))
}

fn construct_default(meta: &TypeMeta) -> Result<Box<dyn Reflect>, DecodeError> {
    meta.get_trait::<TypeTraitDefault>()
        .map(TypeTraitDefault::default)
        .ok_or_else(|| DecodeError::NoFactory {
            type_path: meta.type_path().into(),
        })
}

/// Builds a default instance, then decodes each stored field into it.
fn decode_fields(
    translator: &Translator<'_>,
    meta: &TypeMeta,
    info: &CompositeInfo,
    data: &str,
    depth: usize,
) -> Result<Box<dyn Reflect>, DecodeError> {
    let interior = scan::unwrap_pair(data, '{', '}')?;
    let owner = info.type_path();

    let mut value = construct_default(meta)?;
    let ReflectMut::Composite(target) = (*value).reflect_mut() else {
        return Err(DecodeError::UnsupportedShape {
            type_path: owner.into(),
        });
    };

    for entry in scan::entries(interior) {
        let (name, text) = split_key_value(entry, owner)?;
        let field = info
            .resolve_field(&name)
            .ok_or_else(|| DecodeError::UnknownField {
                field: name.clone(),
                type_path: owner.into(),
            })?;

        let decoded = translator
            .decode_value(text, field.type_info(), depth + 1)
            .map_err(|err| err.in_field(field.name(), owner))?;

        let slot = target
            .field_mut(field.name())
            .ok_or_else(|| DecodeError::UnknownField {
                field: field.name().into(),
                type_path: owner.into(),
            })?;
        slot.set(decoded).map_err(|rejected| {
            DecodeError::mismatched(field.type_info().type_path(), (*rejected).reflect_type_path())
                .in_field(field.name(), owner)
        })?;
    }

    target.after_decode();
    Ok(value)
}

/// Decodes a `TYPE`/`DATA` pair.
///
/// With `expected`, the tag must resolve to that very type.
fn decode_wrapper(
    translator: &Translator<'_>,
    text: &str,
    first: &str,
    second: &str,
    expected: Option<&TypeInfo>,
    depth: usize,
) -> Result<Box<dyn Reflect>, DecodeError> {
    let owner = expected.map_or("wrapper", TypeInfo::type_path);
    let malformed = || DecodeError::MalformedWrapper {
        count: 2,
        text: text.into(),
    };

    let (first_key, first_value) = split_key_value(first, owner)?;
    let (second_key, second_value) = split_key_value(second, owner)?;
    let (tag_text, data) = match (first_key.as_str(), second_key.as_str()) {
        (TYPE_KEY, DATA_KEY) => (first_value, second_value),
        (DATA_KEY, TYPE_KEY) => (second_value, first_value),
        _ => return Err(malformed()),
    };

    let tag = parse_key(tag_text, owner)?;
    let meta = translator
        .registry()
        .resolve(&tag)
        .ok_or_else(|| DecodeError::UnknownTypeTag { tag: tag.clone() })?;

    if let Some(expected) = expected
        && expected.ty_id() != meta.ty_id()
    {
        return Err(DecodeError::mismatched(expected.type_path(), meta.type_path()));
    }

    log::trace!("decoding `{}` from tag `{tag}`", meta.type_path());
    match meta.type_info() {
        TypeInfo::Composite(info) => decode_fields(translator, meta, info, data, depth),
        info => translator.decode_value(data, info, depth + 1),
    }
}

/// Decodes into a slot declared as the composite `expected`.
pub(crate) fn decode_composite(
    translator: &Translator<'_>,
    text: &str,
    expected: &'static TypeInfo,
    depth: usize,
) -> Result<Box<dyn Reflect>, DecodeError> {
    let interior = scan::unwrap_pair(text, '{', '}')?;
    let mut entries = scan::entries(interior);

    match (entries.next(), entries.next(), entries.next()) {
        (None, ..) => {
            let meta = translator
                .registry()
                .get(expected.ty_id())
                .ok_or_else(|| DecodeError::NoFactory {
                    type_path: expected.type_path().into(),
                })?;
            let mut value = construct_default(meta)?;
            if let ReflectMut::Composite(composite) = (*value).reflect_mut() {
                composite.after_decode();
            }
            Ok(value)
        }
        (Some(first), Some(second), None) => {
            decode_wrapper(translator, text, first, second, Some(expected), depth)
        }
        (Some(_), None, _) => Err(DecodeError::MalformedWrapper {
            count: 1,
            text: text.into(),
        }),
        (Some(_), Some(_), Some(_)) => Err(DecodeError::MalformedWrapper {
            count: 3 + entries.count(),
            text: text.into(),
        }),
    }
}

/// Decodes into a `Box<dyn Reflect>` slot.
///
/// Returns the held value boxed once more, as a `Box<dyn Reflect>` value, so
/// it fits lists and options of such slots.
pub(crate) fn decode_dynamic(
    translator: &Translator<'_>,
    text: &str,
    slot: &'static TypeInfo,
    depth: usize,
) -> Result<Box<dyn Reflect>, DecodeError> {
    let interior = scan::unwrap_pair(text, '{', '}')?;
    let entries = scan::split_elements(interior);

    let held = match entries.as_slice() {
        [] => {
            return Err(DecodeError::MissingTypeTag {
                type_path: slot.type_path().into(),
            });
        }
        [first, second] => decode_wrapper(translator, text, first, second, None, depth)?,
        _ => {
            return Err(DecodeError::MalformedWrapper {
                count: entries.len(),
                text: text.into(),
            });
        }
    };

    Ok(Reflect::into_boxed_reflect(held))
}

#[cfg(test)]
mod tests {
    use mithril_reflect::derive::Reflect;
    use mithril_reflect::registry::TypeRegistry;

    use crate::{DecodeError, Translator};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(type_path = "tests::Lamp")]
    pub struct Lamp {
        pub lit: bool,
        #[reflect(formerly = "brightness")]
        pub lumens: u32,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(type_path = "tests::Hollow")]
    pub struct Hollow;

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<Lamp>();
        registry.register::<Hollow>();
        registry
    }

    #[test]
    fn wrapper_shape() {
        let registry = registry();
        let translator = Translator::new(&registry);

        let lamp = Lamp { lit: true, lumens: 40 };
        let text = translator.encode(&lamp).unwrap();
        assert_eq!(text, r#"{"TYPE":"tests::Lamp","DATA":{"lit":true,"lumens":40}}"#);
        assert_eq!(translator.decode_as::<Lamp>(&text).unwrap(), lamp);
    }

    #[test]
    fn entry_order_and_aliases() {
        let registry = registry();
        let translator = Translator::new(&registry);

        let text = r#"{ "DATA": { "brightness": 7 }, "TYPE": "tests::Lamp" }"#;
        let lamp = translator.decode_as::<Lamp>(text).unwrap();
        assert_eq!(lamp, Lamp { lit: false, lumens: 7 });
    }

    #[test]
    fn empty_composite() {
        let registry = registry();
        let translator = Translator::new(&registry);

        assert_eq!(translator.encode(&Hollow).unwrap(), "{}");
        assert_eq!(translator.decode_as::<Hollow>("{ }").unwrap(), Hollow);
        assert_eq!(translator.decode_as::<Lamp>("{}").unwrap(), Lamp::default());
    }

    #[test]
    fn wrong_entry_counts() {
        let registry = registry();
        let translator = Translator::new(&registry);

        let err = translator.decode_as::<Lamp>(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedWrapper { count: 1, .. }));

        let text = r#"{"TYPE": "tests::Lamp", "DATA": {}, "EXTRA": 1, "MORE": 2}"#;
        let err = translator.decode_as::<Lamp>(text).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedWrapper { count: 4, .. }));

        let err = translator.decode_as::<Lamp>(r#"{"KIND": "x", "DATA": {}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedWrapper { count: 2, .. }));
    }

    #[test]
    fn tag_must_match_slot() {
        let registry = registry();
        let translator = Translator::new(&registry);

        let err = translator
            .decode_as::<Lamp>(r#"{"TYPE": "tests::Missing", "DATA": {}}"#)
            .unwrap_err();
        assert_eq!(err, DecodeError::UnknownTypeTag { tag: "tests::Missing".into() });

        let err = translator
            .decode_as::<Lamp>(r#"{"TYPE": "tests::Hollow", "DATA": {}}"#)
            .unwrap_err();
        assert!(matches!(err, DecodeError::MismatchedType { .. }));
    }

    #[test]
    fn field_failures_name_the_field() {
        let registry = registry();
        let translator = Translator::new(&registry);

        let text = r#"{"TYPE": "tests::Lamp", "DATA": {"lit": "yes"}}"#;
        let err = translator.decode_as::<Lamp>(text).unwrap_err();
        let DecodeError::InField { field, type_path, .. } = &err else {
            panic!("unexpected {err:?}");
        };
        assert_eq!((field.as_str(), type_path.as_str()), ("lit", "tests::Lamp"));
        assert!(matches!(err.root_cause(), DecodeError::Format { .. }));

        let text = r#"{"TYPE": "tests::Lamp", "DATA": {"color": 1}}"#;
        let err = translator.decode_as::<Lamp>(text).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownField { .. }));
    }
}
