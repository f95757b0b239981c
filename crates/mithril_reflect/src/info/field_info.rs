use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

/// One entry of a composite's field-descriptor table.
///
/// Holds the field name, the names it was formerly known by, and the
/// declared type. Getting and setting go through
/// [`Composite::field`](crate::ops::Composite::field) and
/// [`Composite::field_mut`](crate::ops::Composite::field_mut) by name.
///
/// ```
/// use mithril_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// pub struct Door {
///     #[reflect(formerly = "open", formerly = "is_open")]
///     pub opened: bool,
/// }
///
/// let info = Door::type_info().as_composite().unwrap();
/// let field = info.field_at(0).unwrap();
///
/// assert!(field.type_is::<bool>());
/// assert_eq!(field.name(), "opened");
/// assert_eq!(field.aliases(), ["open", "is_open"]);
/// ```
#[derive(Clone, Debug)]
pub struct FieldInfo {
    ty_id: TypeId,
    name: &'static str,
    aliases: &'static [&'static str],
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for the given field `name` and type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            aliases: &[],
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    /// Records former names of this field.
    #[inline]
    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Returns the `TypeId` of the declared type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the declared type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the former names of this field.
    #[inline]
    pub const fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Returns `true` if `name` is the current or a former name.
    #[inline]
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
