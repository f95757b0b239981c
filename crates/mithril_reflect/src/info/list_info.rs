use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::List;

/// Compile-time information of a growable collection, such as `Vec<T>`.
///
/// Decoding a list creates an empty instance with [`ListInfo::construct`]
/// and pushes each decoded item into it.
///
/// ```
/// use core::any::TypeId;
/// use mithril_reflect::info::Typed;
///
/// let info = <Vec<i32> as Typed>::type_info().as_list().unwrap();
/// assert_eq!(info.item_id(), TypeId::of::<i32>());
///
/// let list = info.construct();
/// assert!(list.is::<Vec<i32>>());
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_id: TypeId,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    item_info: fn() -> &'static TypeInfo,
    new: fn() -> Box<dyn Reflect>,
}

fn new_list<T: Default + Reflect>() -> Box<dyn Reflect> {
    Box::new(T::default())
}

impl ListInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ListInfo`].
    #[inline]
    pub const fn new<TList, TItem>() -> Self
    where
        TList: List + TypePath + Default,
        TItem: Reflect + Typed,
    {
        Self {
            ty: Type::of::<TList>(),
            item_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            new: new_list::<TList>,
        }
    }

    /// Returns the [`TypeId`] of list items.
    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_id
    }

    /// Returns `true` if the item type is `T`.
    #[inline]
    pub fn item_is<T: Any>(&self) -> bool {
        self.item_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of list items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Creates an empty list of this type.
    #[inline]
    pub fn construct(&self) -> Box<dyn Reflect> {
        (self.new)()
    }
}
