use alloc::boxed::Box;

use crate::Reflect;

/// Sequential access to an array-like value.
///
/// Implemented for `Vec<T>`, `VecDeque<T>` and `[T; N]`. Fixed-size arrays
/// refuse [`push`](List::push).
///
/// ```
/// use mithril_reflect::{Reflect, ops::List};
///
/// let mut list = vec![1_u8, 2];
/// List::push(&mut list, Box::new(3_u8)).unwrap();
/// assert_eq!(list, [1, 2, 3]);
///
/// let rejected = List::push(&mut list, Box::new(4_i32)).unwrap_err();
/// assert!(rejected.is::<i32>());
///
/// let mut array = [1_u8, 2];
/// assert!(List::push(&mut array, Box::new(3_u8)).is_err());
/// ```
pub trait List: Reflect {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index`, mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends an item.
    ///
    /// Returns the value back if its type is not the item type, or if the
    /// container cannot grow.
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns `true` if there are no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    /// Iterates the items in order.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter {
            list: self,
            index: 0,
        }
    }
}

/// Iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
