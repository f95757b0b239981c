use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{self, GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{OptionalInfo, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            impls::concat(&["core::option::Option<", T::type_path(), ">"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionalInfo::new::<T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Optional(self.as_ref().map(Reflect::as_reflect))
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Optional(self.as_mut().map(Reflect::as_reflect_mut))
    }
}

impl<T: Reflect + Typed + GetTypeMeta> GetTypeMeta for Option<T> {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(1);
        meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn optional_paths_and_views() {
        assert_eq!(
            <Option<String>>::type_path(),
            "core::option::Option<alloc::string::String>"
        );

        let none: Option<u8> = None;
        assert!(matches!(none.reflect_ref(), ReflectRef::Optional(None)));

        let some = Some(3_u8);
        let ReflectRef::Optional(Some(inner)) = some.reflect_ref() else {
            unreachable!()
        };
        assert_eq!(inner.downcast_ref::<u8>(), Some(&3));
    }

    #[test]
    fn wrap_and_none() {
        let info = <Option<i32> as Typed>::type_info().as_optional().unwrap();
        assert!(info.construct_none().take::<Option<i32>>().unwrap().is_none());

        let wrapped = info.wrap(Box::new(5_i32)).unwrap();
        assert_eq!(wrapped.take::<Option<i32>>().unwrap(), Some(5));

        let rejected = info.wrap(Box::new(5_i64)).unwrap_err();
        assert!(rejected.is::<i64>());
    }
}
