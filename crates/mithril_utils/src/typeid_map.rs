use core::any::TypeId;
use core::fmt;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

/// Per-type storage for the type registry and the generic `Typed` cells.
///
/// Keys are [`TypeId`]s, which are hashed already, so lookups go through
/// [`NoOpHashState`].
///
/// ```
/// use core::any::TypeId;
/// use mithril_utils::TypeIdMap;
///
/// let mut metas = TypeIdMap::new();
/// assert!(metas.try_insert(TypeId::of::<u8>(), || "u8"));
/// assert!(!metas.try_insert(TypeId::of::<u8>(), || "shadowed"));
/// assert_eq!(metas.get(&TypeId::of::<u8>()), Some(&"u8"));
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity_and_hasher(capacity, NoOpHashState))
    }

    /// Stores `make()` under `id` unless the key is taken.
    ///
    /// Returns whether the value was stored. `make` runs only when it is.
    #[inline]
    pub fn try_insert(&mut self, id: TypeId, make: impl FnOnce() -> V) -> bool {
        match self.0.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(make());
                true
            }
        }
    }

    /// Returns the value under `id`, storing `make()` first if the key is free.
    #[inline]
    pub fn get_or_insert(&mut self, id: TypeId, make: impl FnOnce() -> V) -> &mut V {
        self.0.entry(id).or_insert_with(make)
    }

    /// Stores `value` under `id` and returns the value it replaced.
    #[inline]
    pub fn insert(&mut self, id: TypeId, value: V) -> Option<V> {
        self.0.insert(id, value)
    }

    #[inline]
    pub fn get(&self, id: &TypeId) -> Option<&V> {
        self.0.get(id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: &TypeId) -> Option<&mut V> {
        self.0.get_mut(id)
    }

    #[inline]
    pub fn contains(&self, id: &TypeId) -> bool {
        self.0.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the stored values in arbitrary order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.values()).finish()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn get_or_insert_keeps_the_first_value() {
        let mut map = TypeIdMap::with_capacity(2);
        assert!(map.is_empty());

        *map.get_or_insert(TypeId::of::<u8>(), || 1) += 10;
        assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || 2), 11);

        assert_eq!(map.insert(TypeId::of::<u8>(), 5), Some(11));
        assert!(map.contains(&TypeId::of::<u8>()));
        assert!(map.get_mut(&TypeId::of::<u16>()).is_none());
        assert_eq!(map.values().copied().collect::<Vec<_>>(), [5]);
        assert_eq!(map.len(), 1);
    }
}
