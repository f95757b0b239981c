use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Compile-time information of a nullable slot, `Option<T>`.
///
/// `null` decodes to [`construct_none`](OptionalInfo::construct_none); any
/// other text is decoded against [`some_info`](OptionalInfo::some_info) and
/// passed through [`wrap`](OptionalInfo::wrap).
#[derive(Clone, Debug)]
pub struct OptionalInfo {
    ty: Type,
    some_info: fn() -> &'static TypeInfo,
    none: fn() -> Box<dyn Reflect>,
    wrap: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
}

fn none_of<T: Reflect + Typed>() -> Box<dyn Reflect> {
    Box::new(Option::<T>::None)
}

fn wrap_some<T: Reflect + Typed>(
    value: Box<dyn Reflect>,
) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
    let value = value.take::<T>()?;
    Ok(Box::new(Some(value)))
}

impl OptionalInfo {
    impl_type_fn!(ty);

    /// Creates a new [`OptionalInfo`] for `Option<T>`.
    #[inline]
    pub const fn new<T: Reflect + Typed>() -> Self
    where
        Option<T>: Reflect + TypePath,
    {
        Self {
            ty: Type::of::<Option<T>>(),
            some_info: T::type_info,
            none: none_of::<T>,
            wrap: wrap_some::<T>,
        }
    }

    /// Returns the [`TypeInfo`] of the wrapped type.
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }

    /// Creates `None`.
    #[inline]
    pub fn construct_none(&self) -> Box<dyn Reflect> {
        (self.none)()
    }

    /// Wraps a decoded inner value into `Some`.
    ///
    /// Returns the value back if its type is not the wrapped type.
    #[inline]
    pub fn wrap(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
        (self.wrap)(value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::info::Typed;

    #[test]
    fn none_and_wrap_build_the_option() {
        let info = <Option<u8>>::type_info().as_optional().unwrap();
        assert_eq!(info.some_info().type_path(), "u8");

        let none = info.construct_none().take::<Option<u8>>().unwrap();
        assert_eq!(none, None);

        let some = info.wrap(Box::new(3_u8)).unwrap();
        assert_eq!(some.take::<Option<u8>>().unwrap(), Some(3));

        let rejected = info.wrap(Box::new(String::from("3"))).unwrap_err();
        assert!(rejected.is::<String>());
    }
}
