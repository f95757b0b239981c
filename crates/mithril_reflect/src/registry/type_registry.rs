use alloc::string::{String, ToString};
use core::any::TypeId;

use mithril_utils::TypeIdMap;
use mithril_utils::hash::{HashMap, HashSet};

use crate::info::{TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, RegistryError, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// The closed table mapping type tags to constructible types.
///
/// [Registering] a type stores the [`TypeMeta`] produced by its
/// [`GetTypeMeta`] impl, indexed by:
///
/// - [`TypeId`];
/// - full type path, the tag written into encoded composites;
/// - short type name, when it is not ambiguous;
/// - former type paths recorded with `#[reflect(formerly = "...")]` or
///   [`register_alias`](Self::register_alias).
///
/// A tag that resolves to nothing is a closed, enumerable failure for the
/// decoder, never a silent default.
///
/// # Example
///
/// ```
/// use mithril_reflect::derive::Reflect;
/// use mithril_reflect::registry::{TypeRegistry, TypeTraitDefault};
///
/// #[derive(Reflect, Default)]
/// #[reflect(type_path = "game::Lantern", formerly = "game::Lamp")]
/// pub struct Lantern {
///     pub lit: bool,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Lantern>();
///
/// let meta = registry.resolve("game::Lamp").unwrap();
/// assert_eq!(meta.type_path(), "game::Lantern");
///
/// let value = meta.get_trait::<TypeTraitDefault>().unwrap().default();
/// assert!(value.is::<Lantern>());
/// ```
///
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    alias_to_id: HashMap<&'static str, TypeId>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create an empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(mithril_utils::hash::FixedHashState),
            type_name_to_id: HashMap::with_hasher(mithril_utils::hash::FixedHashState),
            ambiguous_names: HashSet::with_hasher(mithril_utils::hash::FixedHashState),
            alias_to_id: HashMap::with_hasher(mithril_utils::hash::FixedHashState),
        }
    }

    /// Create a type registry with the primitive types registered.
    ///
    /// - `bool` `char`
    /// - `i8 - i128` `isize`
    /// - `u8 - u128` `usize`
    /// - `f32` `f64`
    /// - `String`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
        alias_to_id: &mut HashMap<&'static str, TypeId>,
    ) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                log::warn!("type name `{type_name}` is ambiguous, use the full type path");
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        type_path_to_id.insert(ty.path(), ty.id());

        for &alias in type_meta.type_info().aliases() {
            if type_path_to_id.contains_key(alias) {
                log::warn!(
                    "alias `{alias}` of `{}` is a registered type path, ignored",
                    ty.path()
                );
                continue;
            }
            if let Some(existing) = alias_to_id.insert(alias, ty.id())
                && existing != ty.id()
            {
                log::warn!("alias `{alias}` is now resolved to `{}`", ty.path());
            }
        }

        log::debug!("registered type `{}`", ty.path());
    }

    // - If key [`TypeId`] has already exist, the function will do nothing and return `false`.
    // - If the key [`TypeId`] does not exist, the function will insert value and return `true`.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
                &mut self.alias_to_id,
            );
            meta
        })
    }

    /// Inserts `type_meta` unless its type is already registered.
    ///
    /// Returns `true` if it was inserted. Dependencies are not registered;
    /// use [`register`](Self::register) for that.
    #[inline]
    pub fn try_insert_type_meta(&mut self, type_meta: TypeMeta) -> bool {
        self.register_internal(type_meta.ty_id(), || type_meta)
    }

    /// Inserts `type_meta`, overwriting the trait table of an already
    /// registered type.
    ///
    /// Dependencies are not registered; use [`register`](Self::register) for
    /// that.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        if !self.type_meta_table.contains(&type_meta.ty_id()) {
            Self::add_new_type_indices(
                &type_meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
                &mut self.alias_to_id,
            );
        }
        self.type_meta_table.insert(type_meta.ty_id(), type_meta);
    }

    /// Registers `T` and, the first time only, its dependencies.
    ///
    /// ```
    /// use core::any::TypeId;
    /// use mithril_reflect::{derive::Reflect, registry::TypeRegistry};
    ///
    /// #[derive(Reflect, Default)]
    /// pub struct Bag {
    ///     pub items: Vec<Option<String>>,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<Bag>();
    ///
    /// assert!(registry.contains(TypeId::of::<Bag>()));
    /// assert!(registry.contains(TypeId::of::<Vec<Option<String>>>()));
    /// assert!(registry.contains(TypeId::of::<String>()));
    /// ```
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Registers every type annotated with `#[reflect(auto_register)]`.
    ///
    /// Returns `true` if link-time collection works on the current platform.
    /// Repeated calls are cheap.
    ///
    /// Requires the `auto_register` feature; without it this always returns
    /// `false`.
    ///
    /// ```no_run
    /// use core::any::TypeId;
    /// use mithril_reflect::{derive::Reflect, registry::TypeRegistry};
    ///
    /// #[derive(Reflect, Default)]
    /// #[reflect(auto_register)]
    /// pub struct Beacon {
    ///     pub range: f32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Beacon>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;
            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Adds the capability `D` to the registered type `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is not registered.
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) {
        match self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            Some(type_meta) => type_meta.insert_trait(D::from_type()),
            None => panic!(
                "Called `TypeRegistry::register_type_trait`, but the type `{}` of type_trait `{}` without registering",
                T::type_path(),
                core::any::type_name::<D>(),
            ),
        }
    }

    /// Records `alias` as a former type path of the registered type `T`.
    ///
    /// Encoded data carrying the old tag then decodes as `T`.
    pub fn register_alias<T: Typed>(&mut self, alias: &'static str) -> Result<(), RegistryError> {
        let type_id = TypeId::of::<T>();
        if !self.contains(type_id) {
            return Err(RegistryError::NotRegistered {
                alias: alias.to_string(),
                type_path: T::type_path().to_string(),
            });
        }

        let existing = self
            .type_path_to_id
            .get(alias)
            .or_else(|| self.alias_to_id.get(alias))
            .copied();

        match existing {
            Some(id) if id == type_id => Ok(()),
            Some(id) => Err(RegistryError::AliasConflict {
                alias: alias.to_string(),
                existing: self
                    .get(id)
                    .map_or_else(String::new, |meta| meta.type_path().to_string()),
            }),
            None => {
                log::debug!("alias `{alias}` registered for `{}`", T::type_path());
                self.alias_to_id.insert(alias, type_id);
                Ok(())
            }
        }
    }

    /// Whether the type with given [`TypeId`] has been registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Returns the [`TypeMeta`] of the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns the [`TypeMeta`] of the given [`TypeId`], mutably.
    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    /// Returns the [`TypeMeta`] with the given full type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        self.get(*self.type_path_to_id.get(type_path)?)
    }

    /// Returns the [`TypeMeta`] with the given short type name.
    ///
    /// Returns `None` if the name is [ambiguous](Self::is_ambiguous).
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        self.get(*self.type_name_to_id.get(type_name)?)
    }

    /// Returns the [`TypeMeta`] formerly known by the given type path.
    pub fn get_with_alias(&self, alias: &str) -> Option<&TypeMeta> {
        self.get(*self.alias_to_id.get(alias)?)
    }

    /// Resolves a type tag: by full type path first, then by alias.
    pub fn resolve(&self, tag: &str) -> Option<&TypeMeta> {
        self.get_with_type_path(tag)
            .or_else(|| self.get_with_alias(tag))
    }

    /// Returns `true` if more than one registered type has this short name.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the capability `T` of the given registered type.
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        self.get(type_id)?.get_trait::<T>()
    }

    /// Returns the [`TypeInfo`] of the given registered type.
    #[inline]
    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }

    /// Iterates the registered types in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set()
            .entries(self.type_path_to_id.keys())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
