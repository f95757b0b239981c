use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicInfo, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::registry::{GetTypeMeta, TypeMeta};

// A field of this type may hold any registered value. The codec always
// writes the type tag of the held value, and decoding resolves it through
// the registry.

impl TypePath for Box<dyn Reflect> {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::boxed::Box<dyn mithril_reflect::Reflect>"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Box<dyn Reflect>"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Box"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

impl Typed for Box<dyn Reflect> {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
    }
}

impl Reflect for Box<dyn Reflect> {
    /// Replaces the held value with any value, never failing.
    ///
    /// A value that is itself a `Box<dyn Reflect>` is unwrapped first.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = match value.take::<Box<dyn Reflect>>() {
            Ok(inner) => inner,
            Err(value) => value,
        };
        Ok(())
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Dynamic(&**self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Dynamic(&mut **self)
    }
}

impl GetTypeMeta for Box<dyn Reflect> {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::with_capacity::<Self>(0)
    }
}
