//! Items referenced by code generated from `#[derive(Reflect)]`.
//!
//! Not part of the public API.

pub use alloc::boxed::Box;
pub use alloc::string::String;
pub use core::any::TypeId;
pub use core::option::Option;
pub use core::result::Result;

// -----------------------------------------------------------------------------
// auto_register

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
    use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

    pub use inventory;

    /// A registration function submitted by a derived type.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Registers `Self`, implemented for every [`GetTypeMeta`] type.
    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Registered by this crate's own submission, so its presence after
    /// [`__register_types`] proves that link-time collection ran.
    pub struct __AvailFlag;

    impl TypePath for __AvailFlag {
        fn type_path() -> &'static str {
            "mithril_reflect::__macro_exports::auto_register::__AvailFlag"
        }

        fn type_name() -> &'static str {
            "__AvailFlag"
        }

        fn type_ident() -> &'static str {
            "__AvailFlag"
        }
    }

    impl Typed for __AvailFlag {
        fn type_info() -> &'static TypeInfo {
            static INFO: TypeInfo = TypeInfo::Opaque(OpaqueInfo::new::<__AvailFlag>());
            &INFO
        }
    }

    impl GetTypeMeta for __AvailFlag {
        fn get_type_meta() -> TypeMeta {
            TypeMeta::with_capacity::<Self>(0)
        }
    }

    inventory::submit!(__AutoRegisterFunc(<__AvailFlag as __RegisterType>::__register));

    /// Runs every submitted registration function.
    pub fn __register_types(registry: &mut TypeRegistry) {
        let mut count = 0_usize;
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
            count += 1;
        }
        log::debug!("auto_register ran {count} registration functions");
    }
}
