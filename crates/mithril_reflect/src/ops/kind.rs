use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Composite, Enum, List};

// -----------------------------------------------------------------------------
// ScalarRef

/// A borrowed primitive value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
    Str(&'a str),
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value, split by kind.
///
/// Obtained with [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Scalar(ScalarRef<'a>),
    Enum(&'a dyn Enum),
    List(&'a dyn List),
    /// `None` for a null slot.
    Optional(Option<&'a dyn Reflect>),
    Composite(&'a dyn Composite),
    /// The value held by a `Box<dyn Reflect>` slot.
    Dynamic(&'a dyn Reflect),
    Opaque(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of this view.
    ///
    /// Fixed-size arrays report [`ReflectKind::List`] here; only their
    /// [`TypeInfo`](crate::info::TypeInfo) tells them apart.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Enum(_) => ReflectKind::Enum,
            Self::List(_) => ReflectKind::List,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Composite(_) => ReflectKind::Composite,
            Self::Dynamic(_) => ReflectKind::Dynamic,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value, split by kind.
///
/// Obtained with [`Reflect::reflect_mut`]. Used to walk a value graph for the
/// pre-encode hook pass and to decode in place.
pub enum ReflectMut<'a> {
    Scalar(&'a mut dyn Reflect),
    Enum(&'a mut dyn Enum),
    List(&'a mut dyn List),
    /// `None` for a null slot.
    Optional(Option<&'a mut dyn Reflect>),
    Composite(&'a mut dyn Composite),
    Dynamic(&'a mut dyn Reflect),
    Opaque(&'a mut dyn Reflect),
}

impl ReflectMut<'_> {
    /// Returns the [`ReflectKind`] of this view.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Enum(_) => ReflectKind::Enum,
            Self::List(_) => ReflectKind::List,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Composite(_) => ReflectKind::Composite,
            Self::Dynamic(_) => ReflectKind::Dynamic,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
