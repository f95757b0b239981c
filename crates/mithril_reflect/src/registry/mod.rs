//! The type registry the decoder resolves type tags against.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: a capability supported by a type.
//! - [`FromType`]: creates a `TypeTrait` from a concrete type.
//! - [`TypeMeta`]: a [`TypeInfo`] plus a [`TypeTrait`] table.
//! - [`GetTypeMeta`]: creates the `TypeMeta` of a type.
//! - [`TypeRegistry`]: the tag-to-type table, with aliases for renamed types.
//! - [`TypeTraitDefault`]: the argument-free factory used by decoding.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] .
//!
//! Link-time collection is done by the [`inventory`] crate. Not every
//! platform supports it; there the function returns `false` instead of
//! failing.
//!
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod default;
mod error;
mod from_type;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use default::TypeTraitDefault;
pub use error::RegistryError;
pub use from_type::FromType;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
pub use type_trait::TypeTrait;
