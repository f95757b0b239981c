use alloc::boxed::Box;
use core::any::Any;

/// A capability attached to a registered type.
///
/// Stored in the trait table of a [`TypeMeta`](crate::registry::TypeMeta)
/// and looked up by its own type, e.g.
/// [`TypeTraitDefault`](crate::registry::TypeTraitDefault).
///
/// Implemented for every `Clone + Send + Sync + 'static` type.
pub trait TypeTrait: Any + Send + Sync {
    /// Clones the capability into a new box.
    fn clone_type_trait(&self) -> Box<dyn TypeTrait>;
}

impl<T: Clone + Any + Send + Sync> TypeTrait for T {
    #[inline]
    fn clone_type_trait(&self) -> Box<dyn TypeTrait> {
        Box::new(self.clone())
    }
}

impl dyn TypeTrait {
    /// Downcasts to a concrete capability.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts to a concrete capability, mutably.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}
