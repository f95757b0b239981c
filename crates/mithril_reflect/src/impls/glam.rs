use glam::{IVec2, IVec3, Quat, Vec2, Vec3, Vec4};

crate::impls::impl_opaque!(Vec2, "glam::Vec2", "Vec2", "glam");
crate::impls::impl_opaque!(Vec3, "glam::Vec3", "Vec3", "glam");
crate::impls::impl_opaque!(Vec4, "glam::Vec4", "Vec4", "glam");
crate::impls::impl_opaque!(Quat, "glam::Quat", "Quat", "glam");
crate::impls::impl_opaque!(IVec2, "glam::IVec2", "IVec2", "glam");
crate::impls::impl_opaque!(IVec3, "glam::IVec3", "IVec3", "glam");

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::info::TypePath;
    use glam::{Quat, Vec3};

    #[test]
    fn glam_paths_are_stable() {
        assert_eq!(Vec3::type_path(), "glam::Vec3");
        assert_eq!(Quat::type_name(), "Quat");

        let mut v = Vec3::ZERO;
        v.set(Box::new(Vec3::ONE)).unwrap();
        assert_eq!(v, Vec3::ONE);
    }
}
