use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by the
/// built-in impls in [`crate::impls`]. The returned [`TypeInfo`] is built once
/// and cached for the life of the process.
///
/// ```
/// use mithril_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// pub struct Lamp {
///     pub lit: bool,
/// }
///
/// let info = Lamp::type_info().as_composite().unwrap();
/// assert_eq!(info.field("lit").unwrap().type_info().type_path(), "bool");
/// ```
///
/// Hand-written impls store their info in a
/// [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell) or, for
/// generic types, a [`GenericTypeInfoCell`](crate::impls::GenericTypeInfoCell).
pub trait Typed: TypePath {
    /// Returns the static type information.
    ///
    /// Use [`DynamicTyped`] through a `dyn Reflect`.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Implemented for every `T: Typed`.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
