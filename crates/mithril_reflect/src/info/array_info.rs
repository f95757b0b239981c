#![allow(clippy::len_without_is_empty, reason = "`len` is fixed for array.")]

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::List;

/// Compile-time information of a fixed-size array.
///
/// An array cannot grow, so decoding collects every item first and hands the
/// whole batch to [`ArrayInfo::assemble`], which fails unless exactly
/// [`len`](ArrayInfo::len) items of the item type are supplied.
///
/// ```
/// use mithril_reflect::{Reflect, info::Typed};
///
/// let info = <[i32; 3] as Typed>::type_info().as_array().unwrap();
/// assert_eq!(info.len(), 3);
/// assert_eq!(info.type_path(), "[i32; 3]");
///
/// let items: Vec<Box<dyn Reflect>> = vec![Box::new(1), Box::new(2), Box::new(3)];
/// let array = info.assemble(items).unwrap();
/// assert_eq!(array.take::<[i32; 3]>().unwrap(), [1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_id: TypeId,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    item_info: fn() -> &'static TypeInfo,
    len: usize,
    from_items: fn(Vec<Box<dyn Reflect>>) -> Option<Box<dyn Reflect>>,
}

impl ArrayInfo {
    impl_type_fn!(ty);

    /// Create a new [`ArrayInfo`].
    ///
    /// `from_items` must return `None` unless given exactly `len` items.
    #[inline]
    pub const fn new<TArray, TItem>(
        len: usize,
        from_items: fn(Vec<Box<dyn Reflect>>) -> Option<Box<dyn Reflect>>,
    ) -> Self
    where
        TArray: List + TypePath,
        TItem: Reflect + Typed,
    {
        Self {
            ty: Type::of::<TArray>(),
            item_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            len,
            from_items,
        }
    }

    /// The compile-time length of the array.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the [`TypeId`] of an array item.
    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_id
    }

    /// Returns `true` if the item type is `T`.
    #[inline]
    pub fn item_is<T: Any>(&self) -> bool {
        self.item_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of array items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Builds an array from decoded items.
    #[inline]
    pub fn assemble(&self, items: Vec<Box<dyn Reflect>>) -> Option<Box<dyn Reflect>> {
        (self.from_items)(items)
    }
}
