use alloc::boxed::Box;
use alloc::vec::Vec;

use mithril_utils::hash::{FixedHashState, HashMap};

use crate::info::{FieldInfo, Type, TypeInfo, TypePath, impl_type_fn};

/// Compile-time information of a composite (named struct).
///
/// The field table lists every eligible field in a stable order: fields
/// inherited from the [base](CompositeInfo::base) first, then the locally
/// declared ones. A local field hides an inherited field of the same name.
///
/// # Examples
///
/// ```
/// use mithril_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// pub struct Pawn {
///     pub name: String,
///     pub health: f32,
/// }
///
/// #[derive(Reflect, Default)]
/// pub struct Guard {
///     #[reflect(base)]
///     pub pawn: Pawn,
///     pub health: f32, // hides `Pawn::health`
///     pub post: u32,
/// }
///
/// let info = Guard::type_info().as_composite().unwrap();
/// let names: Vec<_> = info.iter().map(|f| f.name()).collect();
/// assert_eq!(names, ["name", "health", "post"]);
/// ```
#[derive(Clone, Debug)]
pub struct CompositeInfo {
    ty: Type,
    base: Option<Type>,
    fields: Box<[FieldInfo]>,
    index: HashMap<&'static str, usize>,
    aliases: &'static [&'static str],
}

impl CompositeInfo {
    impl_type_fn!(ty);

    /// Creates a new [`CompositeInfo`] from the locally declared fields.
    ///
    /// # Panics
    ///
    /// Panics if two fields share a name.
    pub fn new<T: TypePath>(fields: &[FieldInfo]) -> Self {
        let mut info = Self {
            ty: Type::of::<T>(),
            base: None,
            fields: Box::new([]),
            index: HashMap::default(),
            aliases: &[],
        };
        info.set_fields(fields.to_vec());
        info
    }

    /// Merges the field table of `base` in front of the local fields.
    ///
    /// # Panics
    ///
    /// Panics if `base` is not a composite.
    pub fn with_base(mut self, base: &'static TypeInfo) -> Self {
        let Ok(base_info) = base.as_composite() else {
            panic!(
                "base `{}` of `{}` is not a composite",
                base.type_path(),
                self.type_path(),
            );
        };

        let mut merged: Vec<FieldInfo> = base_info
            .iter()
            .filter(|field| !self.index.contains_key(field.name()))
            .cloned()
            .collect();
        merged.extend(self.fields.iter().cloned());

        self.base = Some(*base.ty());
        self.set_fields(merged);
        self
    }

    /// Records former type paths of this composite.
    #[inline]
    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn set_fields(&mut self, fields: Vec<FieldInfo>) {
        let mut index = HashMap::with_capacity_and_hasher(fields.len(), FixedHashState);
        for (position, field) in fields.iter().enumerate() {
            if index.insert(field.name(), position).is_some() {
                panic!(
                    "duplicate field `{}` in `{}`",
                    field.name(),
                    self.type_path(),
                );
            }
        }
        self.fields = fields.into_boxed_slice();
        self.index = index;
    }

    /// Returns the base type, if one was declared with `#[reflect(base)]`.
    #[inline]
    pub fn base(&self) -> Option<&Type> {
        self.base.as_ref()
    }

    /// Former type paths recorded with `#[reflect(formerly = "...")]`.
    #[inline]
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Returns the field with the given current name.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(*self.index.get(name)?)
    }

    /// Returns the field at the given position of the table.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the first field that was formerly known as `alias`.
    pub fn field_by_alias(&self, alias: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.aliases().contains(&alias))
    }

    /// Looks a field up by current name, then by former name.
    ///
    /// ```
    /// use mithril_reflect::{derive::Reflect, info::Typed};
    ///
    /// #[derive(Reflect, Default)]
    /// pub struct Chest {
    ///     #[reflect(formerly = "slots")]
    ///     pub capacity: u32,
    /// }
    ///
    /// let info = Chest::type_info().as_composite().unwrap();
    /// assert_eq!(info.resolve_field("slots").unwrap().name(), "capacity");
    /// assert!(info.resolve_field("missing").is_none());
    /// ```
    pub fn resolve_field(&self, name: &str) -> Option<&FieldInfo> {
        self.field(name).or_else(|| self.field_by_alias(name))
    }

    /// Returns the position of the field with the given name.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns an iterator over the fields in table order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the field table.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no eligible fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CompositeInfo;
    use crate::info::{FieldInfo, TypePath};

    struct Probe;

    impl TypePath for Probe {
        fn type_path() -> &'static str {
            "tests::Probe"
        }
        fn type_name() -> &'static str {
            "Probe"
        }
        fn type_ident() -> &'static str {
            "Probe"
        }
    }

    #[test]
    fn alias_lookup_falls_back() {
        static OLD: [&str; 1] = ["hp"];
        let info = CompositeInfo::new::<Probe>(&[
            FieldInfo::new::<f32>("health").with_aliases(&OLD),
            FieldInfo::new::<u8>("level"),
        ]);

        assert_eq!(info.index_of("level"), Some(1));
        assert!(info.field("hp").is_none());
        assert_eq!(info.resolve_field("hp").unwrap().name(), "health");
        assert!(info.resolve_field("mana").is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate field `a`")]
    fn duplicate_names_panic() {
        CompositeInfo::new::<Probe>(&[FieldInfo::new::<u8>("a"), FieldInfo::new::<u16>("a")]);
    }
}
