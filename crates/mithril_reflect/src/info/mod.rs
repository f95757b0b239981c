//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: stable type identifiers, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): full name, used as the type tag.
//!     - [`type_name`](TypePath::type_name): name without module path.
//!     - [`type_ident`](TypePath::type_ident): name without generics and module path.
//!     - [`module_path`](TypePath::module_path): optional module path.
//! - [`DynamicTypePath`]: dynamic dispatch for `TypePath`.
//! - [`Type`]: a `TypeId` and a [`TypePathTable`].
//! - [`TypeInfo`]: the per-kind information the decoder works from:
//!     - [`ScalarInfo`]: booleans, numbers, `char` and `String`, see [`ScalarKind`].
//!     - [`EnumInfo`]: field-less enumerations, a table of [`VariantInfo`].
//!     - [`ListInfo`]: growable collections, with item info and a factory.
//!     - [`ArrayInfo`]: fixed-size arrays, with item info and length.
//!     - [`OptionalInfo`]: `Option<T>`.
//!     - [`CompositeInfo`]: named structs, an ordered table of [`FieldInfo`].
//!     - [`DynamicInfo`]: `Box<dyn Reflect>`.
//!     - [`OpaqueInfo`]: values encoded only through overrides.
//! - [`ReflectKind`]: the kind of a `TypeInfo`.
//! - [`Typed`]: static access to `TypeInfo`; [`DynamicTyped`] for `dyn Reflect`.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod composite_info;
mod enum_info;
mod field_info;
mod list_info;
mod opaque_info;
mod optional_info;
mod scalar_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use composite_info::CompositeInfo;
pub use enum_info::{EnumInfo, VariantInfo};
pub use field_info::FieldInfo;
pub use list_info::ListInfo;
pub use opaque_info::{DynamicInfo, OpaqueInfo};
pub use optional_info::OptionalInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
