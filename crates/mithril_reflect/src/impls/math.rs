use crate::math::Rect;

crate::impls::impl_opaque!(Rect, "mithril_reflect::math::Rect", "Rect", "mithril_reflect::math");

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::math::Rect;
    use crate::ops::ReflectRef;

    #[test]
    fn rect_is_opaque() {
        assert_eq!(Rect::type_path(), "mithril_reflect::math::Rect");
        assert_eq!(Rect::type_info().kind(), ReflectKind::Opaque);

        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(matches!(r.reflect_ref(), ReflectRef::Opaque(_)));
    }
}
