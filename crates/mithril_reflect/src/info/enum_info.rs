use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// VariantInfo

/// One member of a field-less enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantInfo {
    name: &'static str,
    discriminant: i64,
}

impl VariantInfo {
    /// Creates a new [`VariantInfo`].
    #[inline]
    pub const fn new(name: &'static str, discriminant: i64) -> Self {
        Self { name, discriminant }
    }

    /// Returns the variant name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the integer discriminant.
    #[inline]
    pub const fn discriminant(&self) -> i64 {
        self.discriminant
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// Compile-time information of a field-less enumeration.
///
/// Variants are kept in declaration order; [`EnumInfo::construct`] builds a
/// value from a variant index so the decoder never needs a live instance.
///
/// ```
/// use mithril_reflect::derive::Reflect;
/// use mithril_reflect::info::Typed;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// pub enum Phase {
///     Idle,
///     Running = 5,
/// }
///
/// let info = Phase::type_info().as_enum().unwrap();
/// assert_eq!(info.index_of("Running"), Some(1));
/// assert_eq!(info.index_of_discriminant(5), Some(1));
///
/// let value = info.construct(0).unwrap();
/// assert_eq!(value.downcast_ref::<Phase>(), Some(&Phase::Idle));
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    variants: Box<[VariantInfo]>,
    from_index: fn(usize) -> Option<Box<dyn Reflect>>,
    aliases: &'static [&'static str],
}

impl EnumInfo {
    impl_type_fn!(ty);

    /// Creates a new [`EnumInfo`].
    ///
    /// `from_index` must return the variant at the given position of
    /// `variants`.
    pub fn new<T: TypePath>(
        variants: &[VariantInfo],
        from_index: fn(usize) -> Option<Box<dyn Reflect>>,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            variants: variants.into(),
            from_index,
            aliases: &[],
        }
    }

    /// Records former type paths of this enum.
    #[inline]
    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Former type paths recorded with `#[reflect(formerly = "...")]`.
    #[inline]
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Returns the variant with the given name.
    pub fn variant(&self, name: &str) -> Option<&VariantInfo> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Returns the variant at the given index.
    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&VariantInfo> {
        self.variants.get(index)
    }

    /// Returns the index of the variant with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variants.iter().position(|v| v.name == name)
    }

    /// Returns the index of the variant with the given discriminant.
    pub fn index_of_discriminant(&self, discriminant: i64) -> Option<usize> {
        self.variants
            .iter()
            .position(|v| v.discriminant == discriminant)
    }

    /// Returns the variants in declaration order.
    #[inline]
    pub fn variants(&self) -> &[VariantInfo] {
        &self.variants
    }

    /// Returns the number of variants.
    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }

    /// Builds the variant at `index`.
    #[inline]
    pub fn construct(&self, index: usize) -> Option<Box<dyn Reflect>> {
        (self.from_index)(index)
    }
}
