use crate::Reflect;

/// Access to the current member of a field-less enumeration.
///
/// ```
/// use mithril_reflect::{derive::Reflect, ops::Enum};
///
/// #[derive(Reflect)]
/// pub enum Facing {
///     North,
///     South = 4,
/// }
///
/// let facing = Facing::South;
/// assert_eq!(facing.variant_name(), "South");
/// assert_eq!(facing.variant_index(), 1);
/// assert_eq!(facing.discriminant(), 4);
/// ```
pub trait Enum: Reflect {
    /// Returns the declared name of the current variant.
    fn variant_name(&self) -> &'static str;

    /// Returns the position of the current variant in declaration order.
    fn variant_index(&self) -> usize;

    /// Returns the integer discriminant of the current variant.
    fn discriminant(&self) -> i64;
}
