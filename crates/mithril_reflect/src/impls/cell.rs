//! Static storage for type information built at runtime.
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`] holding one [`TypeInfo`].
//! - [`GenericTypeInfoCell`] / [`GenericTypePathCell`]: a `static` inside a
//!   generic function is shared by every instantiation, so these cells key
//!   their leaked values by [`TypeId`].

use alloc::{boxed::Box, string::String};
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use mithril_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    pub trait CellValue: Send + Sync + 'static {}

    impl CellValue for String {}
    impl CellValue for crate::info::TypeInfo {}
}

use sealed::CellValue;

// -----------------------------------------------------------------------------
// NonGeneric

/// Lazily built [`TypeInfo`] of a non-generic type.
///
/// ```
/// use mithril_reflect::impls::NonGenericTypeInfoCell;
/// use mithril_reflect::info::{FieldInfo, CompositeInfo, TypeInfo, TypePath, Typed};
///
/// struct Door {
///     open: bool,
/// }
///
/// impl TypePath for Door {
///     fn type_path() -> &'static str { "demo::Door" }
///     fn type_name() -> &'static str { "Door" }
///     fn type_ident() -> &'static str { "Door" }
/// }
///
/// impl Typed for Door {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Composite(
///             CompositeInfo::new::<Door>(&[FieldInfo::new::<bool>("open")])
///         ))
///     }
/// }
///
/// let info = Door::type_info().as_composite().unwrap();
/// assert_eq!(info.field("open").unwrap().name(), "open");
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first use.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// Generic

/// Per-instantiation storage behind [`GenericTypeInfoCell`] and
/// [`GenericTypePathCell`].
pub struct GenericTypeCell<T: CellValue>(RwLock<TypeIdMap<&'static T>>);

/// Lazily built [`TypeInfo`] of each instantiation of a generic type.
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Lazily built type path strings of each instantiation of a generic type.
///
/// ```
/// use mithril_reflect::impls::{self, GenericTypePathCell};
/// use mithril_reflect::info::TypePath;
///
/// struct Slot<T>(T);
///
/// impl<T: TypePath> TypePath for Slot<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["demo::Slot<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["Slot<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Slot" }
/// }
///
/// assert_eq!(<Slot<u8>>::type_path(), "demo::Slot<u8>");
/// assert_eq!(<Slot<String>>::type_name(), "Slot<String>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: CellValue> GenericTypeCell<T> {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, building it with `f` on first use.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        let cached = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();

        match cached {
            Some(value) => value,
            // Built outside the write lock: `f` may recurse into this cell
            // for a nested instantiation.
            None => {
                let value = f();
                let leaked: &'static T = *self
                    .0
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get_or_insert(type_id, || Box::leak(Box::new(value)));
                leaked
            }
        }
    }
}
