use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;
use core::ops::{Deref, DerefMut};

use mithril_utils::TypeIdMap;

use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime storage for one registered type: its [`TypeInfo`] and a table of
/// [`TypeTrait`] capabilities.
///
/// Usually produced by [`GetTypeMeta::get_type_meta`], which
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements.
///
/// ```
/// use mithril_reflect::registry::{FromType, TypeMeta, TypeTraitDefault};
///
/// let mut meta = TypeMeta::of::<String>();
/// meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
///
/// let factory = meta.get_trait::<TypeTraitDefault>().unwrap();
/// assert_eq!(factory.default().take::<String>().unwrap(), "");
/// ```
pub struct TypeMeta {
    type_info: &'static TypeInfo,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// Create an empty [`TypeMeta`] for `T`.
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self {
            type_info: T::type_info(),
            trait_table: TypeIdMap::new(),
        }
    }

    /// Create an empty [`TypeMeta`] for `T` with room for `capacity` traits.
    #[inline]
    pub fn with_capacity<T: Typed>(capacity: usize) -> Self {
        Self {
            type_info: T::type_info(),
            trait_table: TypeIdMap::with_capacity(capacity),
        }
    }

    /// Returns the [`TypeInfo`].
    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    /// Returns the [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &'static Type {
        self.type_info.ty()
    }

    crate::info::impl_type_fn!();

    /// Insert a new [`TypeTrait`], replacing any previous one of the same type.
    #[inline(always)]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.insert_trait_by_id(TypeId::of::<T>(), Box::new(data));
    }

    #[inline(never)]
    fn insert_trait_by_id(&mut self, id: TypeId, val: Box<dyn TypeTrait>) {
        self.trait_table.insert(id, val);
    }

    /// Returns the [`TypeTrait`] of type `T`, if present.
    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.trait_table
            .get(&TypeId::of::<T>())
            .map(Deref::deref)
            .and_then(<dyn TypeTrait>::downcast_ref)
    }

    /// Returns the [`TypeTrait`] of type `T` mutably, if present.
    #[inline]
    pub fn get_trait_mut<T: TypeTrait>(&mut self) -> Option<&mut T> {
        self.trait_table
            .get_mut(&TypeId::of::<T>())
            .map(DerefMut::deref_mut)
            .and_then(<dyn TypeTrait>::downcast_mut)
    }

    /// Returns `true` if the [`TypeTrait`] of type `T` is present.
    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains(&TypeId::of::<T>())
    }

    /// Returns the number of [`TypeTrait`]s.
    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_path", &self.type_path())
            .field("trait_len", &self.trait_len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Produces the [`TypeMeta`] that registers a type into a [`TypeRegistry`].
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect), which adds
/// [`TypeTraitDefault`](crate::registry::TypeTraitDefault) for composites and
/// registers every field type as a dependency.
///
/// ```
/// use mithril_reflect::{derive::Reflect, registry::GetTypeMeta};
/// use mithril_reflect::registry::TypeTraitDefault;
///
/// #[derive(Reflect, Default)]
/// pub struct Crate {
///     pub slots: u32,
/// }
///
/// let meta = Crate::get_type_meta();
/// assert!(meta.has_trait::<TypeTraitDefault>());
/// ```
pub trait GetTypeMeta: Typed {
    /// Returns the default [`TypeMeta`] for this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers other types needed by this type.
    ///
    /// Called only once, when the type itself is first registered.
    #[inline(always)]
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
