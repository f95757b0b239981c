use crate::Reflect;
use crate::info::{CompositeInfo, FieldInfo};

/// Field access for a composite (named struct).
///
/// Fields are addressed by their current name as listed in the type's
/// [`CompositeInfo`]. Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect)
/// for named structs; a field marked `#[reflect(base)]` forwards lookups of
/// inherited names to the embedded base.
///
/// # Example
///
/// ```
/// use mithril_reflect::{derive::Reflect, ops::Composite};
///
/// #[derive(Reflect, Default)]
/// pub struct Torch {
///     pub fuel: f32,
///     #[reflect(serialize)]
///     lit: bool,
/// }
///
/// let mut torch = Torch::default();
/// *torch.field_mut("fuel").unwrap().downcast_mut::<f32>().unwrap() = 0.5;
///
/// assert_eq!(torch.fuel, 0.5);
/// assert!(torch.field("lit").is_some());
/// assert!(torch.field("missing").is_none());
/// ```
pub trait Composite: Reflect {
    /// Returns the field with the given current name.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field with the given current name, mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Fires before the fields of this value are encoded.
    #[inline]
    fn before_encode(&mut self) {}

    /// Fires after every field of this value was decoded and written.
    #[inline]
    fn after_decode(&mut self) {}

    /// Returns the field table of this value's type.
    #[inline]
    fn composite_info(&self) -> Option<&'static CompositeInfo> {
        self.reflect_type_info().as_composite().ok()
    }
}

impl dyn Composite {
    /// Iterates `(descriptor, value)` pairs in field-table order.
    ///
    /// Descriptors whose value cannot be reached are skipped.
    pub fn iter_fields(&self) -> impl Iterator<Item = (&'static FieldInfo, &dyn Reflect)> {
        self.composite_info()
            .into_iter()
            .flat_map(CompositeInfo::iter)
            .filter_map(|field| Some((field, self.field(field.name())?)))
    }

    /// Returns the number of fields in the table.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.composite_info().map_or(0, CompositeInfo::field_len)
    }
}
