use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// Dynamic access to a live value.
///
/// Every type the codec can walk implements this trait, usually through
/// [`#[derive(Reflect)]`](crate::derive::Reflect). The encoder inspects a
/// value through [`reflect_ref`](Reflect::reflect_ref); the decoder builds a
/// fresh boxed value and writes it into place with [`set`](Reflect::set).
///
/// # Kinds
///
/// [`ReflectRef`] and [`ReflectMut`] split values by kind:
///
/// - `Scalar`: booleans, numbers, `char`, `String`.
/// - `Enum`: field-less enumerations, see [`Enum`](crate::ops::Enum).
/// - `List`: growable collections and fixed-size arrays, see [`List`](crate::ops::List).
/// - `Optional`: `Option<T>`, the nullable slot.
/// - `Composite`: named structs, see [`Composite`](crate::ops::Composite).
/// - `Dynamic`: `Box<dyn Reflect>`, a slot holding any registered value.
/// - `Opaque`: values only encodable through a registered override.
///
/// # Example
///
/// ```
/// use mithril_reflect::Reflect;
///
/// let mut x = 5_u32;
/// x.set(Box::new(7_u32)).unwrap();
/// assert_eq!(x, 7);
///
/// // Wrong type: the value is handed back.
/// let rejected = x.set(Box::new(1.5_f32)).unwrap_err();
/// assert!(rejected.is::<f32>());
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this value to `&dyn Reflect`.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this value to `&mut dyn Reflect`.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as `Box<dyn Reflect>`.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of the underlying type.
    ///
    /// `Box<dyn Reflect>::type_id` returns the id of the box, which is rarely
    /// what the caller wants.
    ///
    /// ```
    /// use core::any::TypeId;
    /// use mithril_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = Box::new(3_i32);
    /// assert_eq!((*x).ty_id(), TypeId::of::<i32>());
    /// ```
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces this value with `value` if the types match.
    ///
    /// On mismatch, `value` is returned untouched.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns an immutable kind view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable kind view of this value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type id was checked before downcasting"),
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// ```
    /// use mithril_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = Box::new(10_i32);
    /// assert_eq!(x.take::<i32>().unwrap(), 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Scalar(scalar) => fmt::Debug::fmt(&scalar, f),
            ReflectRef::Dynamic(inner) => fmt::Debug::fmt(inner, f),
            _ => write!(f, "Reflect({})", self.reflect_type_path()),
        }
    }
}

// -----------------------------------------------------------------------------
// SerializationHooks

/// Callbacks fired around encoding and decoding of a composite.
///
/// Opt in with `#[reflect(hooks)]` on a derived type and implement this trait;
/// the derived [`Composite`](crate::ops::Composite) impl forwards to it.
///
/// ```
/// use mithril_reflect::{derive::Reflect, SerializationHooks};
///
/// #[derive(Reflect, Default)]
/// #[reflect(hooks)]
/// pub struct Inventory {
///     pub items: Vec<String>,
///     #[reflect(skip)]
///     lookup_dirty: bool,
/// }
///
/// impl SerializationHooks for Inventory {
///     fn after_decode(&mut self) {
///         self.lookup_dirty = true;
///     }
/// }
/// ```
pub trait SerializationHooks {
    /// Called before the value's fields are encoded.
    fn before_encode(&mut self) {}

    /// Called after all of the value's fields were decoded and written.
    fn after_decode(&mut self) {}
}
