use crate::info::Typed;

/// Creates a [`TypeTrait`](crate::registry::TypeTrait) for a concrete type.
///
/// The derive macro uses this to fill the trait table of the generated
/// [`TypeMeta`](crate::registry::TypeMeta).
///
/// ```
/// use mithril_reflect::registry::{FromType, TypeMeta, TypeTraitDefault};
///
/// let mut meta = TypeMeta::of::<String>();
/// meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
/// assert!(meta.has_trait::<TypeTraitDefault>());
/// ```
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
