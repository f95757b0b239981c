use alloc::boxed::Box;
use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef, ScalarRef};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};

macro_rules! impl_scalar {
    (@reflect $ty:ty, $kind:ident, |$this:ident| $as_ref:expr) => {
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<$ty>(ScalarKind::$kind)))
            }
        }

        impl Reflect for $ty {
            fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                let $this = self;
                ReflectRef::Scalar($as_ref)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(self)
            }
        }

        impl GetTypeMeta for $ty {
            fn get_type_meta() -> TypeMeta {
                let mut meta = TypeMeta::with_capacity::<Self>(1);
                meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
                meta
            }
        }
    };
    ($ty:ty, $kind:ident, $name:literal, |$this:ident| $as_ref:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $name
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }
        }

        impl_scalar!(@reflect $ty, $kind, |$this| $as_ref);
    };
}

impl_scalar!(bool, Bool, "bool", |v| ScalarRef::Bool(*v));
impl_scalar!(char, Char, "char", |v| ScalarRef::Char(*v));
impl_scalar!(i8, I8, "i8", |v| ScalarRef::I8(*v));
impl_scalar!(i16, I16, "i16", |v| ScalarRef::I16(*v));
impl_scalar!(i32, I32, "i32", |v| ScalarRef::I32(*v));
impl_scalar!(i64, I64, "i64", |v| ScalarRef::I64(*v));
impl_scalar!(i128, I128, "i128", |v| ScalarRef::I128(*v));
impl_scalar!(isize, Isize, "isize", |v| ScalarRef::Isize(*v));
impl_scalar!(u8, U8, "u8", |v| ScalarRef::U8(*v));
impl_scalar!(u16, U16, "u16", |v| ScalarRef::U16(*v));
impl_scalar!(u32, U32, "u32", |v| ScalarRef::U32(*v));
impl_scalar!(u64, U64, "u64", |v| ScalarRef::U64(*v));
impl_scalar!(u128, U128, "u128", |v| ScalarRef::U128(*v));
impl_scalar!(usize, Usize, "usize", |v| ScalarRef::Usize(*v));
impl_scalar!(f32, F32, "f32", |v| ScalarRef::F32(*v));
impl_scalar!(f64, F64, "f64", |v| ScalarRef::F64(*v));

impl TypePath for String {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::string::String"
    }

    #[inline]
    fn type_name() -> &'static str {
        "String"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "String"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::string")
    }
}

impl_scalar!(@reflect String, String, |v| ScalarRef::Str(v.as_str()));
