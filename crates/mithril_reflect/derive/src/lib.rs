//! `#[derive(Reflect)]` for the mithril object model.
//!
//! See [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `GetTypeMeta`
/// - `Composite` (for `struct T { ... }` and `struct T;`)
/// - `Enum` (for enums whose variants carry no data)
///
/// Generic types, tuple structs and unions are rejected: a type tag must be
/// a fixed string.
///
/// Structs must implement [`Default`]; it is registered as the factory the
/// decoder builds instances with before writing fields.
///
/// ## Field eligibility
///
/// A field is serialized if it is `pub` or marked `#[reflect(serialize)]`,
/// and it is not marked `#[reflect(skip)]`. Other fields keep their
/// `Default` value when decoding.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// pub struct Lamp {
///     pub lit: bool,                 // serialized
///     #[reflect(serialize)]
///     color: u32,                    // serialized
///     #[reflect(skip)]
///     pub flicker: f32,              // not serialized
///     cache: Vec<u8>,                // not serialized
/// }
/// ```
///
/// ## Renames
///
/// `#[reflect(formerly = "old")]` records a former field name; data stored
/// under the old name still decodes into the field. At type level it records
/// a former type tag. Both are repeatable.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(type_path = "game::Lantern", formerly = "game::Lamp")]
/// pub struct Lantern {
///     #[reflect(formerly = "on", formerly = "is_on")]
///     pub lit: bool,
/// }
/// ```
///
/// ## Custom Type Path
///
/// The default type path is `module_path!()` plus the type name, which
/// changes when the type moves. Pin it with:
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(type_path = "game::items::Crate")]
/// pub struct Crate;
/// ```
///
/// ## Inheritance
///
/// One field may be marked `#[reflect(base)]`. Its type must be a composite;
/// its fields are listed first, followed by the local ones. A local field of
/// the same name hides the inherited one. The base field itself is not
/// serialized.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// pub struct Guard {
///     #[reflect(base)]
///     pub pawn: Pawn,
///     pub post: u32,
/// }
/// ```
///
/// ## Hooks
///
/// `#[reflect(hooks)]` forwards `Composite::before_encode` and
/// `Composite::after_decode` to the type's `SerializationHooks` impl.
///
/// ## Auto Registration
///
/// `#[reflect(auto_register)]` collects the type for
/// `TypeRegistry::auto_register`. A no-op without the `auto_register`
/// feature.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
