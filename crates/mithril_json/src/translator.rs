use alloc::boxed::Box;
use alloc::string::String;

use mithril_reflect::Reflect;
use mithril_reflect::info::{TypeInfo, Typed};
use mithril_reflect::ops::ReflectRef;
use mithril_reflect::registry::TypeRegistry;

use crate::writer::Writer;
use crate::{DecodeError, EncodeError, Overrides, array, hooks, object, primitive};

// -----------------------------------------------------------------------------
// Config

/// Indentation unit of pretty output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

/// Output options of a [`Translator`].
///
/// Decoding accepts any whitespace regardless of these options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Break lines after opening brackets and separators.
    pub pretty: bool,
    /// Indentation unit used when `pretty` is set.
    pub indent: Indent,
}

/// Deepest bracket nesting that decoding descends into.
///
/// Each list, array, object and `DATA` payload is one level. Deeper text
/// fails with [`DecodeError::TooDeep`].
pub const MAX_DEPTH: usize = 128;

// -----------------------------------------------------------------------------
// Translator

/// Encodes value graphs to text and decodes them back.
///
/// A translator borrows the [`TypeRegistry`] that resolves type tags and owns
/// an [`Overrides`] table and a [`TranslatorConfig`]. It holds no per-call
/// state, so a single instance can serve any number of calls, from any number
/// of threads.
///
/// # Dispatch
///
/// Encoding looks at the value, decoding at the expected [`TypeInfo`]:
///
/// 1. an override registered for the type path wins;
/// 2. otherwise the kind selects the codec: scalar and enum literals, `[...]`
///    for lists and arrays, `null` or the inner value for options, the
///    `TYPE`/`DATA` wrapper for composites and `Box<dyn Reflect>` slots;
/// 3. opaque types without an override fail with `UnsupportedShape`.
///
/// # Example
///
/// ```
/// use mithril_json::Translator;
/// use mithril_reflect::derive::Reflect;
/// use mithril_reflect::registry::TypeRegistry;
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// #[reflect(type_path = "game::Pawn")]
/// pub struct Pawn {
///     pub name: String,
///     pub health: f32,
///     pub tags: Vec<String>,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Pawn>();
/// let translator = Translator::new(&registry);
///
/// let pawn = Pawn { name: "Ada".into(), health: 7.5, tags: vec!["hero".into()] };
/// let text = translator.encode(&pawn).unwrap();
/// assert_eq!(
///     text,
///     r#"{"TYPE":"game::Pawn","DATA":{"name":"Ada","health":7.5,"tags":["hero"]}}"#,
/// );
///
/// let decoded: Pawn = translator.decode_as(&text).unwrap();
/// assert_eq!(decoded, pawn);
/// ```
#[derive(Clone, Debug)]
pub struct Translator<'a> {
    registry: &'a TypeRegistry,
    overrides: Overrides,
    config: TranslatorConfig,
}

impl<'a> Translator<'a> {
    /// Creates a compact translator with the [built-in](Overrides::builtin)
    /// overrides.
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            overrides: Overrides::builtin(),
            config: TranslatorConfig::default(),
        }
    }

    /// Enables pretty output.
    #[inline]
    pub fn pretty(mut self) -> Self {
        self.config.pretty = true;
        self
    }

    /// Sets the indentation unit of pretty output.
    #[inline]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.config.indent = indent;
        self
    }

    /// Replaces the override table.
    #[inline]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Replaces the output options.
    #[inline]
    pub fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    #[inline]
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    #[inline]
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Encode

    /// Encodes a value graph.
    ///
    /// No hooks fire; see [`encode_mut`](Self::encode_mut).
    pub fn encode(&self, value: &dyn Reflect) -> Result<String, EncodeError> {
        let mut w = Writer::new(&self.config);
        self.encode_value(value, &mut w)?;
        Ok(w.finish())
    }

    /// Fires the pre-encode hook of every composite in the graph, then
    /// encodes it.
    pub fn encode_mut(&self, value: &mut dyn Reflect) -> Result<String, EncodeError> {
        hooks::fire_before_encode(value);
        self.encode(value)
    }

    pub(crate) fn encode_value(
        &self,
        value: &dyn Reflect,
        w: &mut Writer<'_>,
    ) -> Result<(), EncodeError> {
        let type_path = value.reflect_type_path();
        if let Some(custom) = self.overrides.get(type_path) {
            log::trace!("encoding `{type_path}` with override");
            w.push_str(&(custom.encode)(value)?);
            return Ok(());
        }

        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => primitive::encode_scalar(w.out(), scalar),
            ReflectRef::Enum(value) => primitive::encode_enum(w.out(), value),
            ReflectRef::List(list) => array::encode_list(self, list, w)?,
            ReflectRef::Optional(None) => w.push_str(primitive::NULL),
            ReflectRef::Optional(Some(inner)) => self.encode_value(inner, w)?,
            ReflectRef::Composite(composite) => object::encode_composite(self, composite, w)?,
            ReflectRef::Dynamic(held) => object::encode_tagged(self, held, w)?,
            ReflectRef::Opaque(_) => {
                return Err(EncodeError::UnsupportedShape {
                    type_path: type_path.into(),
                });
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Decode

    /// Decodes text against the expected type.
    ///
    /// For a `Box<dyn Reflect>` slot the result is the held value boxed once
    /// more, i.e. a value of type `Box<dyn Reflect>`.
    pub fn decode(
        &self,
        text: &str,
        info: &'static TypeInfo,
    ) -> Result<Box<dyn Reflect>, DecodeError> {
        self.decode_value(text, info, 0)
    }

    /// Decodes text as `T`.
    pub fn decode_as<T: Typed + Reflect>(&self, text: &str) -> Result<T, DecodeError> {
        self.decode_value(text, T::type_info(), 0)?
            .take::<T>()
            .map_err(|value| DecodeError::mismatched(T::type_path(), (*value).reflect_type_path()))
    }

    /// Decodes text against the type of `target` and writes the result into
    /// it. `target` is left untouched on failure.
    pub fn decode_into(&self, text: &str, target: &mut dyn Reflect) -> Result<(), DecodeError> {
        let info = target.reflect_type_info();
        let value = self.decode_value(text, info, 0)?;
        target
            .set(value)
            .map_err(|value| DecodeError::mismatched(info.type_path(), (*value).reflect_type_path()))
    }

    pub(crate) fn decode_value(
        &self,
        text: &str,
        info: &'static TypeInfo,
        depth: usize,
    ) -> Result<Box<dyn Reflect>, DecodeError> {
        if depth > MAX_DEPTH {
            log::warn!("refusing to decode `{}` nested deeper than {MAX_DEPTH}", info.type_path());
            return Err(DecodeError::TooDeep { limit: MAX_DEPTH });
        }
        let text = text.trim();
        log::trace!("decoding `{}`", info.type_path());

        if primitive::is_null(text) {
            return match info {
                TypeInfo::Optional(optional) => Ok(optional.construct_none()),
                _ => Err(DecodeError::UnexpectedNull {
                    type_path: info.type_path().into(),
                }),
            };
        }

        if let Some(custom) = self.overrides.get(info.type_path()) {
            return (custom.decode)(text);
        }

        match info {
            TypeInfo::Scalar(scalar) => primitive::decode_scalar(text, scalar),
            TypeInfo::Enum(enum_info) => primitive::decode_enum(text, enum_info),
            TypeInfo::List(list) => array::decode_list(self, text, list, depth),
            TypeInfo::Array(array) => array::decode_array(self, text, array, depth),
            TypeInfo::Optional(optional) => {
                let inner = self.decode_value(text, optional.some_info(), depth)?;
                optional.wrap(inner).map_err(|inner| {
                    DecodeError::mismatched(
                        optional.some_info().type_path(),
                        (*inner).reflect_type_path(),
                    )
                })
            }
            TypeInfo::Composite(_) => object::decode_composite(self, text, info, depth),
            TypeInfo::Dynamic(_) => object::decode_dynamic(self, text, info, depth),
            TypeInfo::Opaque(_) => Err(DecodeError::UnsupportedShape {
                type_path: info.type_path().into(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use mithril_reflect::Reflect;
    use mithril_reflect::derive::Reflect;
    use mithril_reflect::registry::TypeRegistry;

    use super::{Indent, Translator};
    use crate::DecodeError;

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(type_path = "tests::Slot")]
    pub struct Slot {
        pub label: Option<String>,
        pub count: u16,
    }

    #[test]
    fn end_to_end_examples() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        assert_eq!(translator.encode(&7_i32).unwrap(), "7");
        assert_eq!(
            translator.encode(&String::from("He said \"hi\"")).unwrap(),
            r#""He said \"hi\"""#
        );
        assert_eq!(translator.decode_as::<[i32; 3]>("[1,2,3]").unwrap(), [1, 2, 3]);
    }

    #[test]
    fn options_and_null() {
        let mut registry = TypeRegistry::new();
        registry.register::<Slot>();
        let translator = Translator::new(&registry);

        let slot = Slot { label: None, count: 2 };
        let text = translator.encode(&slot).unwrap();
        assert_eq!(text, r#"{"TYPE":"tests::Slot","DATA":{"label":null,"count":2}}"#);
        assert_eq!(translator.decode_as::<Slot>(&text).unwrap(), slot);

        assert_eq!(translator.decode_as::<Option<u8>>("  ").unwrap(), None);
        assert_eq!(translator.decode_as::<Option<u8>>("4").unwrap(), Some(4));
        let err = translator.decode_as::<u8>("null").unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedNull { .. }));
    }

    #[test]
    fn decode_into_keeps_target_on_failure() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        let mut values = vec![1_i64, 2];
        translator.decode_into("[5, 6, 7]", &mut values).unwrap();
        assert_eq!(values, [5, 6, 7]);

        assert!(translator.decode_into("[8, x]", &mut values).is_err());
        assert_eq!(values, [5, 6, 7]);
    }

    #[test]
    fn pretty_output() {
        let mut registry = TypeRegistry::new();
        registry.register::<Slot>();
        let translator = Translator::new(&registry)
            .pretty()
            .with_indent(Indent::Spaces(2));

        let slot = Slot { label: Some("a".into()), count: 1 };
        let text = translator.encode(&slot).unwrap();
        assert_eq!(
            text,
            "{\n  \"TYPE\": \"tests::Slot\",\n  \"DATA\": {\n    \"label\": \"a\",\n    \"count\": 1\n  }\n}"
        );
        assert_eq!(translator.decode_as::<Slot>(&text).unwrap(), slot);
    }

    #[test]
    fn dynamic_slots_hold_any_registered_value() {
        let mut registry = TypeRegistry::new();
        registry.register::<Slot>();
        let translator = Translator::new(&registry);

        let held: Box<dyn Reflect> = Box::new(42_u16);
        let text = translator.encode(&held).unwrap();
        assert_eq!(text, r#"{"TYPE":"u16","DATA":42}"#);

        let decoded = translator.decode_as::<Box<dyn Reflect>>(&text).unwrap();
        assert_eq!((*decoded).downcast_ref::<u16>(), Some(&42));

        let err = translator.decode_as::<Box<dyn Reflect>>("{}").unwrap_err();
        assert!(matches!(err, DecodeError::MissingTypeTag { .. }));
    }
}
