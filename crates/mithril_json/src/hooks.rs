use mithril_reflect::Reflect;
use mithril_reflect::ops::ReflectMut;

/// Fires [`Composite::before_encode`] on every composite of a value graph,
/// parents before their fields.
///
/// [`Translator::encode_mut`](crate::Translator::encode_mut) runs this pass
/// before encoding. Fields embedded with `#[reflect(base)]` are visited as
/// fields of the outer composite; the base itself receives no call.
///
/// [`Composite::before_encode`]: mithril_reflect::ops::Composite::before_encode
pub fn fire_before_encode(value: &mut dyn Reflect) {
    match value.reflect_mut() {
        ReflectMut::Composite(composite) => {
            composite.before_encode();
            let Some(info) = composite.composite_info() else {
                return;
            };
            for field in info.iter() {
                if let Some(field) = composite.field_mut(field.name()) {
                    fire_before_encode(field);
                }
            }
        }
        ReflectMut::List(list) => {
            for index in 0..list.len() {
                if let Some(item) = list.get_mut(index) {
                    fire_before_encode(item);
                }
            }
        }
        ReflectMut::Optional(Some(inner)) | ReflectMut::Dynamic(inner) => {
            fire_before_encode(inner);
        }
        ReflectMut::Optional(None)
        | ReflectMut::Scalar(_)
        | ReflectMut::Enum(_)
        | ReflectMut::Opaque(_) => {}
    }
}
