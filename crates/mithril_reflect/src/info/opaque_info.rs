use crate::info::{Type, TypePath, impl_type_fn};

/// Metadata for types whose internals are hidden from the codec.
///
/// Opaque values, such as `glam::Vec3` or `uuid::Uuid`, can only be encoded
/// through a type-specific override keyed by their type path.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}

/// Metadata for `Box<dyn Reflect>`, a slot that can hold any value.
///
/// The concrete type of the held value is only known from the type tag of
/// the encoded composite, so decoding such a slot always goes through the
/// registry.
#[derive(Debug, Clone)]
pub struct DynamicInfo {
    ty: Type,
}

impl DynamicInfo {
    impl_type_fn!(ty);

    /// Create a new [`DynamicInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
