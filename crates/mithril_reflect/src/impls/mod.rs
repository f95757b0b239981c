//! Reflection impls for foreign types, and the helpers they are built with.
//!
//! - [`concat`]: string concatenation for generic type paths.
//! - [`NonGenericTypeInfoCell`]: `Typed` storage for non-generic types.
//! - [`GenericTypePathCell`], [`GenericTypeInfoCell`]: the same for generics.
//!
//! ## Implemented Menu
//!
//! - scalars: `bool`, `char`, `i8`-`i128`, `isize`, `u8`-`u128`, `usize`,
//!   `f32`, `f64`, `String`
//! - lists: `Vec<T>`, `VecDeque<T>`, `[T; N]`
//! - `Option<T>`
//! - `Box<dyn Reflect>`, the slot that holds any registered value
//! - opaque: [`Rect`](crate::math::Rect)
//! - "glam" feature: `Vec2`, `Vec3`, `Vec4`, `Quat`, `IVec2`, `IVec3`
//! - "uuid" feature: `Uuid`

use alloc::string::String;

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod array;
mod dynamic;
mod list;
mod math;
mod option;
mod scalar;

#[cfg(feature = "glam")]
mod glam;
#[cfg(feature = "uuid")]
mod uuid;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

/// Concatenates string slices with a single allocation.
///
/// Used to build the type paths of generic types.
///
/// ```
/// use mithril_reflect::impls;
///
/// let s = impls::concat(&["alloc::vec::Vec", "<", "u8", ">"]);
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert_eq!(s.capacity(), 19);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}

// -----------------------------------------------------------------------------
// Opaque impl helper

/// Implements `TypePath`, `Typed`, `Reflect` and `GetTypeMeta` for a
/// non-generic type whose internals the codec does not walk.
macro_rules! impl_opaque {
    ($ty:ty, $path:literal, $name:literal, $module:literal) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<Self>())
                })
            }
        }

        impl $crate::Reflect for $ty {
            fn set(
                &mut self,
                value: ::alloc::boxed::Box<dyn $crate::Reflect>,
            ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Opaque(self)
            }
        }

        impl $crate::registry::GetTypeMeta for $ty {
            fn get_type_meta() -> $crate::registry::TypeMeta {
                let mut meta = $crate::registry::TypeMeta::with_capacity::<Self>(1);
                meta.insert_trait::<$crate::registry::TypeTraitDefault>(
                    $crate::registry::FromType::<Self>::from_type(),
                );
                meta
            }
        }
    };
}

pub(crate) use impl_opaque;
