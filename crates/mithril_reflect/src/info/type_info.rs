use core::fmt;

use crate::info::{ArrayInfo, CompositeInfo, DynamicInfo, EnumInfo};
use crate::info::{ListInfo, OpaqueInfo, OptionalInfo, ScalarInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The "kinds" of a reflected type.
///
/// Each kind selects one codec path: scalars go through the primitive codec,
/// lists and arrays through the array codec, composites through the object
/// codec and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Scalar,
    Enum,
    List,
    Array,
    Optional,
    Composite,
    Dynamic,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::Enum => f.pad("Enum"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Optional => f.pad("Optional"),
            Self::Composite => f.pad("Composite"),
            Self::Dynamic => f.pad("Dynamic"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a [`TypeInfo`] is not the expected [`ReflectKind`].
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("reflect kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for a reflected type.
///
/// Besides naming the type, every variant carries the function pointers its
/// decoder needs: element type info for lists, the variant table of an enum,
/// the ordered field table of a composite. Decoding therefore only needs a
/// `&'static TypeInfo` and a registry, never a live value.
///
/// Obtain it through [`Typed::type_info`](crate::info::Typed::type_info),
/// [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped::reflect_type_info)
/// or [`TypeRegistry::get_type_info`](crate::registry::TypeRegistry::get_type_info).
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    Enum(EnumInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Optional(OptionalInfo),
    Composite(CompositeInfo),
    Dynamic(DynamicInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to the kind-specific information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_composite: Composite => CompositeInfo);
    impl_cast_method!(as_dynamic: Dynamic => DynamicInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Scalar(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Composite(info) => info.ty(),
            Self::Dynamic(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] of this `TypeInfo`.
    ///
    /// ```
    /// use mithril_reflect::info::{ReflectKind, Typed};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Scalar);
    /// assert_eq!(<Vec<i32>>::type_info().kind(), ReflectKind::List);
    /// assert_eq!(<[i32; 3]>::type_info().kind(), ReflectKind::Array);
    /// ```
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Enum(_) => ReflectKind::Enum,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Composite(_) => ReflectKind::Composite,
            Self::Dynamic(_) => ReflectKind::Dynamic,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Former type paths recorded with `#[reflect(formerly = "...")]`.
    ///
    /// Only composites and enums can carry aliases.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Composite(info) => info.aliases(),
            Self::Enum(info) => info.aliases(),
            _ => &[],
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn cast_reports_kind_mismatch() {
        let info = <Vec<u8>>::type_info();
        assert!(info.as_list().is_ok());

        let err = info.as_composite().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Composite);
        assert_eq!(err.received, ReflectKind::List);
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch: expected Composite, received List"
        );
    }

    #[test]
    fn aliases_default_empty() {
        assert!(String::type_info().aliases().is_empty());
        assert!(<Option<u8>>::type_info().aliases().is_empty());
    }
}
