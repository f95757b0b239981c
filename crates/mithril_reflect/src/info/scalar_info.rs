use core::fmt;

use crate::info::{Type, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// ScalarKind

/// Which primitive a [`ScalarInfo`] describes.
///
/// The primitive codec parses text keyed by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
}

impl ScalarKind {
    /// Returns `true` for the integer kinds.
    pub const fn is_integer(self) -> bool {
        !matches!(self, Self::Bool | Self::F32 | Self::F64 | Self::Char | Self::String)
    }

    /// Returns `true` for `f32` and `f64`.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns `true` for kinds encoded inside quotes.
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::Char | Self::String)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "String",
        };
        f.pad(name)
    }
}

// -----------------------------------------------------------------------------
// ScalarInfo

/// Type information for booleans, numbers, `char` and `String`.
#[derive(Debug, Clone)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
}

impl ScalarInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ScalarInfo`].
    #[inline]
    pub const fn new<T: TypePath>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the scalar kind.
    #[inline]
    pub const fn scalar_kind(&self) -> ScalarKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::ScalarKind;
    use crate::info::Typed;

    #[test]
    fn kind_classification() {
        assert!(ScalarKind::U128.is_integer());
        assert!(!ScalarKind::F64.is_integer());
        assert!(ScalarKind::F32.is_float());
        assert!(ScalarKind::Char.is_textual());
        assert!(!ScalarKind::Bool.is_textual());
    }

    #[test]
    fn builtin_scalars_report_kind() {
        let info = i16::type_info().as_scalar().unwrap();
        assert_eq!(info.scalar_kind(), ScalarKind::I16);

        let info = String::type_info().as_scalar().unwrap();
        assert_eq!(info.scalar_kind(), ScalarKind::String);
        assert_eq!(info.scalar_kind().to_string(), "String");
    }
}
