//! Type-specific codecs for opaque value types.
//!
//! An override replaces the generic rules for one type path, on both the
//! encode and the decode side. The built-in table covers:
//!
//! | type | encoding |
//! |------|----------|
//! | `glam::Vec2`, `Vec3`, `Vec4` | `[x,y]`, `[x,y,z]`, `[x,y,z,w]` |
//! | `glam::Quat` | `[x,y,z,w]` |
//! | `glam::IVec2`, `IVec3` | `[x,y]`, `[x,y,z]` |
//! | [`Rect`](mithril_reflect::math::Rect) | `[x,y,width,height]` |
//! | `uuid::Uuid` | `"67e55044-10b1-426f-9247-bb680e5fe0c8"` |
//!
//! glam types require the `glam` feature, `Uuid` the `uuid` feature.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use mithril_reflect::Reflect;
use mithril_reflect::info::TypePath;
use mithril_reflect::math::Rect;
use mithril_reflect::ops::ScalarRef;
use mithril_utils::hash::HashMap;

use crate::{DecodeError, EncodeError, primitive, scan};

// -----------------------------------------------------------------------------
// JsonOverride

/// An encode and decode function pair for one type.
///
/// `encode` receives a value of the overridden type and returns its complete
/// text. `decode` receives trimmed, non-null text.
#[derive(Clone, Copy)]
pub struct JsonOverride {
    pub encode: fn(&dyn Reflect) -> Result<String, EncodeError>,
    pub decode: fn(&str) -> Result<Box<dyn Reflect>, DecodeError>,
}

impl fmt::Debug for JsonOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonOverride").finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Overrides

/// Table of [`JsonOverride`]s keyed by type path.
///
/// # Example
///
/// ```
/// use mithril_json::{EncodeError, DecodeError, JsonOverride, Overrides, Translator};
/// use mithril_reflect::Reflect;
/// use mithril_reflect::registry::TypeRegistry;
///
/// // Booleans as `1`/`0`.
/// fn encode(value: &dyn Reflect) -> Result<String, EncodeError> {
///     let v = value.downcast_ref::<bool>().copied().unwrap_or_default();
///     Ok(String::from(if v { "1" } else { "0" }))
/// }
///
/// fn decode(text: &str) -> Result<Box<dyn Reflect>, DecodeError> {
///     Ok(Box::new(text == "1"))
/// }
///
/// let mut overrides = Overrides::builtin();
/// overrides.insert::<bool>(JsonOverride { encode, decode });
///
/// let registry = TypeRegistry::new();
/// let translator = Translator::new(&registry).with_overrides(overrides);
///
/// assert_eq!(translator.encode(&vec![true, false]).unwrap(), "[1,0]");
/// assert_eq!(translator.decode_as::<bool>("1").unwrap(), true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    table: HashMap<&'static str, JsonOverride>,
}

impl Overrides {
    /// Creates an empty table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the built-in overrides.
    pub fn builtin() -> Self {
        let mut overrides = Self::new();
        overrides.insert::<Rect>(JsonOverride {
            encode: encode_rect,
            decode: decode_rect,
        });

        #[cfg(feature = "glam")]
        glam_impls::insert_all(&mut overrides);

        #[cfg(feature = "uuid")]
        overrides.insert::<uuid::Uuid>(JsonOverride {
            encode: uuid_impls::encode,
            decode: uuid_impls::decode,
        });

        overrides
    }

    /// Adds or replaces the override of `T`.
    #[inline]
    pub fn insert<T: TypePath>(&mut self, value: JsonOverride) -> Option<JsonOverride> {
        self.insert_with_path(T::type_path(), value)
    }

    /// Adds or replaces the override of the type with the given path.
    pub fn insert_with_path(
        &mut self,
        type_path: &'static str,
        value: JsonOverride,
    ) -> Option<JsonOverride> {
        log::debug!("override registered for `{type_path}`");
        self.table.insert(type_path, value)
    }

    /// Removes the override of `T`.
    #[inline]
    pub fn remove<T: TypePath>(&mut self) -> Option<JsonOverride> {
        self.table.remove(T::type_path())
    }

    /// Returns the override of the type with the given path.
    #[inline]
    pub fn get(&self, type_path: &str) -> Option<&JsonOverride> {
        self.table.get(type_path)
    }

    /// Returns `true` if the type with the given path is overridden.
    #[inline]
    pub fn contains(&self, type_path: &str) -> bool {
        self.table.contains_key(type_path)
    }

    /// Returns the number of overrides.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Component helpers

fn wrong_type<T: TypePath>(value: &dyn Reflect) -> EncodeError {
    EncodeError::Override {
        type_path: T::type_path().into(),
        reason: alloc::format!("received a `{}`", value.reflect_type_path()),
    }
}

/// Writes scalar components as a bracketed list.
fn encode_components<'a>(components: impl IntoIterator<Item = ScalarRef<'a>>) -> String {
    let mut out = String::from("[");
    for (index, component) in components.into_iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        primitive::encode_scalar(&mut out, component);
    }
    out.push(']');
    out
}

/// Parses a bracketed list of exactly `N` components.
fn decode_components<T, const N: usize>(text: &str, type_path: &str) -> Result<[T; N], DecodeError>
where
    T: core::str::FromStr + Copy + Default,
    T::Err: fmt::Display,
{
    let interior = scan::unwrap_pair(text, '[', ']')?;
    let items = scan::split_elements(interior);
    if items.len() != N {
        return Err(DecodeError::format(
            text,
            type_path,
            alloc::format!("expected {N} components, found {}", items.len()),
        ));
    }

    let mut out = [T::default(); N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item
            .parse()
            .map_err(|err| DecodeError::format(text, type_path, err))?;
    }
    Ok(out)
}

// -----------------------------------------------------------------------------
// Rect

fn encode_rect(value: &dyn Reflect) -> Result<String, EncodeError> {
    let rect = value
        .downcast_ref::<Rect>()
        .ok_or_else(|| wrong_type::<Rect>(value))?;
    Ok(encode_components(
        [rect.x, rect.y, rect.width, rect.height].map(ScalarRef::F32),
    ))
}

fn decode_rect(text: &str) -> Result<Box<dyn Reflect>, DecodeError> {
    let [x, y, width, height] = decode_components::<f32, 4>(text, Rect::type_path())?;
    Ok(Box::new(Rect::new(x, y, width, height)))
}

// -----------------------------------------------------------------------------
// glam

#[cfg(feature = "glam")]
mod glam_impls {
    use alloc::boxed::Box;
    use alloc::string::String;

    use glam::{IVec2, IVec3, Quat, Vec2, Vec3, Vec4};
    use mithril_reflect::Reflect;
    use mithril_reflect::info::TypePath;
    use mithril_reflect::ops::ScalarRef;

    use super::{JsonOverride, Overrides, decode_components, encode_components, wrong_type};
    use crate::{DecodeError, EncodeError};

    macro_rules! vector_override {
        ($name:ident, $ty:ty, $scalar:ty, $variant:ident, $len:literal) => {
            mod $name {
                use super::*;

                pub fn encode(value: &dyn Reflect) -> Result<String, EncodeError> {
                    let v = value
                        .downcast_ref::<$ty>()
                        .ok_or_else(|| wrong_type::<$ty>(value))?;
                    Ok(encode_components(v.to_array().map(ScalarRef::$variant)))
                }

                pub fn decode(text: &str) -> Result<Box<dyn Reflect>, DecodeError> {
                    let components = decode_components::<$scalar, $len>(text, <$ty>::type_path())?;
                    Ok(Box::new(<$ty>::from_array(components)))
                }
            }
        };
    }

    vector_override!(vec2, Vec2, f32, F32, 2);
    vector_override!(vec3, Vec3, f32, F32, 3);
    vector_override!(vec4, Vec4, f32, F32, 4);
    vector_override!(quat, Quat, f32, F32, 4);
    vector_override!(ivec2, IVec2, i32, I32, 2);
    vector_override!(ivec3, IVec3, i32, I32, 3);

    pub(super) fn insert_all(overrides: &mut Overrides) {
        macro_rules! insert {
            ($($name:ident: $ty:ty),*) => {$(
                overrides.insert::<$ty>(JsonOverride {
                    encode: $name::encode,
                    decode: $name::decode,
                });
            )*};
        }

        insert!(vec2: Vec2, vec3: Vec3, vec4: Vec4, quat: Quat, ivec2: IVec2, ivec3: IVec3);
    }
}

// -----------------------------------------------------------------------------
// uuid

#[cfg(feature = "uuid")]
mod uuid_impls {
    use alloc::boxed::Box;
    use alloc::string::String;

    use mithril_reflect::Reflect;
    use mithril_reflect::info::TypePath;
    use uuid::Uuid;

    use super::wrong_type;
    use crate::{DecodeError, EncodeError, escape};

    pub fn encode(value: &dyn Reflect) -> Result<String, EncodeError> {
        let id = value
            .downcast_ref::<Uuid>()
            .ok_or_else(|| wrong_type::<Uuid>(value))?;
        let mut buf = Uuid::encode_buffer();
        let mut out = String::new();
        escape::write_quoted_str(&mut out, id.hyphenated().encode_lower(&mut buf));
        Ok(out)
    }

    pub fn decode(text: &str) -> Result<Box<dyn Reflect>, DecodeError> {
        let body = escape::decode_str(text)
            .map_err(|err| DecodeError::format(text, Uuid::type_path(), err))?;
        let id = Uuid::parse_str(&body)
            .map_err(|err| DecodeError::format(text, Uuid::type_path(), err))?;
        Ok(Box::new(id))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use mithril_reflect::math::Rect;
    use mithril_reflect::registry::TypeRegistry;

    use crate::{DecodeError, Translator};

    #[test]
    fn rect_as_four_components() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        let rect = Rect::new(1.0, 2.5, 30.0, -4.0);
        let text = translator.encode(&rect).unwrap();
        assert_eq!(text, "[1,2.5,30,-4]");
        assert_eq!(translator.decode_as::<Rect>(&text).unwrap(), rect);

        let err = translator.decode_as::<Rect>("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DecodeError::Format { .. }));
        let err = translator.decode_as::<Rect>("[1, 2, 3, x]").unwrap_err();
        assert!(matches!(err, DecodeError::Format { .. }));
    }

    #[test]
    fn opaque_without_override() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry).with_overrides(crate::Overrides::new());

        let err = translator.encode(&Rect::default()).unwrap_err();
        assert!(matches!(err, crate::EncodeError::UnsupportedShape { .. }));
        let err = translator.decode_as::<Rect>("[0,0,0,0]").unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedShape { .. }));
    }

    #[cfg(feature = "glam")]
    #[test]
    fn glam_components() {
        use glam::{IVec3, Quat, Vec2};

        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        assert_eq!(translator.encode(&Vec2::new(0.5, -1.0)).unwrap(), "[0.5,-1]");
        assert_eq!(translator.decode_as::<IVec3>("[1, -2, 3]").unwrap(), IVec3::new(1, -2, 3));
        assert_eq!(
            translator.decode_as::<Quat>("[0,0,0,1]").unwrap(),
            Quat::IDENTITY
        );
        assert!(translator.decode_as::<Vec2>("[1.0]").is_err());
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn uuid_as_quoted_string() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        let id = uuid::Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8);
        let text = translator.encode(&id).unwrap();
        assert_eq!(text, r#""67e55044-10b1-426f-9247-bb680e5fe0c8""#);
        assert_eq!(translator.decode_as::<uuid::Uuid>(&text).unwrap(), id);
        assert!(translator.decode_as::<uuid::Uuid>(r#""not-a-uuid""#).is_err());
    }
}
