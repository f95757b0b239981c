use alloc::boxed::Box;
use alloc::string::{String, ToString};

// -----------------------------------------------------------------------------
// EncodeError

/// Failure to encode a value graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The value is opaque and no override is registered for its type.
    #[error("no encoding is available for opaque type `{type_path}`")]
    UnsupportedShape { type_path: String },
    /// A field listed in the field table could not be read from the value.
    #[error("field `{field}` of `{type_path}` could not be read")]
    MissingField { field: String, type_path: String },
    /// An override was handed a value it cannot encode.
    #[error("override for `{type_path}` failed: {reason}")]
    Override { type_path: String, reason: String },
}

// -----------------------------------------------------------------------------
// DecodeError

/// Failure to decode text into a value.
///
/// Failures raised while decoding a composite field are wrapped in
/// [`DecodeError::InField`], so the message of a deeply nested failure reads
/// as a path. [`root_cause`](DecodeError::root_cause) strips the wrappers.
///
/// ```
/// use mithril_json::{DecodeError, Translator};
/// use mithril_reflect::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
/// let translator = Translator::new(&registry);
///
/// let err = translator.decode_as::<i32>("seven").unwrap_err();
/// assert!(matches!(err, DecodeError::Format { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The text is not enclosed in the expected bracket pair.
    #[error("expected text enclosed in `{open}{close}`, found `{text}`")]
    MissingBracket {
        open: char,
        close: char,
        text: String,
    },
    /// An object holds neither zero entries nor exactly `TYPE` and `DATA`.
    #[error("malformed wrapper object with {count} entries: `{text}`")]
    MalformedWrapper { count: usize, text: String },
    /// A literal could not be parsed as the target type.
    #[error("cannot decode `{text}` as `{type_path}`: {reason}")]
    Format {
        text: String,
        type_path: String,
        reason: String,
    },
    /// `null` was found where the slot cannot be null.
    #[error("unexpected null for non-nullable `{type_path}`")]
    UnexpectedNull { type_path: String },
    /// The type tag of a wrapper is neither a registered path nor an alias.
    #[error("type tag `{tag}` is not registered")]
    UnknownTypeTag { tag: String },
    /// An untyped `{}` was found where only the type tag names the type.
    #[error("slot `{type_path}` requires a type tag, found an untyped object")]
    MissingTypeTag { type_path: String },
    /// A stored field matches no current or former field name.
    #[error("`{type_path}` has no field named or formerly named `{field}`")]
    UnknownField { field: String, type_path: String },
    /// Neither a variant name nor a discriminant of the enum.
    #[error("`{text}` is not a variant of `{type_path}`")]
    UnknownVariant { text: String, type_path: String },
    /// The decoded type does not fit the slot.
    #[error("expected `{expected}`, found `{found}`")]
    MismatchedType { expected: String, found: String },
    /// The type is registered without an argument-free factory.
    #[error("`{type_path}` cannot be constructed: no default factory is registered")]
    NoFactory { type_path: String },
    /// A fixed-size array received the wrong number of items.
    #[error("`{type_path}` holds {expected} items, found {found}")]
    LengthMismatch {
        type_path: String,
        expected: usize,
        found: usize,
    },
    /// The text nests deeper than the decoder descends.
    #[error("text nests deeper than {limit} levels")]
    TooDeep { limit: usize },
    /// The type has no decode strategy.
    #[error("no decode strategy for `{type_path}`")]
    UnsupportedShape { type_path: String },
    /// A failure inside a composite field.
    #[error("in field `{field}` of `{type_path}`: {source}")]
    InField {
        field: String,
        type_path: String,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Returns the innermost error, skipping every [`InField`](Self::InField)
    /// wrapper.
    ///
    /// ```
    /// use mithril_json::DecodeError;
    ///
    /// let inner = DecodeError::UnexpectedNull { type_path: "u8".into() };
    /// let err = inner.clone().in_field("hp", "game::Pawn");
    /// assert_eq!(err.root_cause(), &inner);
    /// ```
    pub fn root_cause(&self) -> &DecodeError {
        let mut err = self;
        while let Self::InField { source, .. } = err {
            err = source;
        }
        err
    }

    /// Wraps this error with the field it was raised in.
    pub fn in_field(self, field: &str, type_path: &str) -> Self {
        Self::InField {
            field: field.to_string(),
            type_path: type_path.to_string(),
            source: Box::new(self),
        }
    }

    #[inline]
    pub(crate) fn format(text: &str, type_path: &str, reason: impl ToString) -> Self {
        Self::Format {
            text: text.to_string(),
            type_path: type_path.to_string(),
            reason: reason.to_string(),
        }
    }

    #[inline]
    pub(crate) fn mismatched(expected: &str, found: &str) -> Self {
        Self::MismatchedType {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
