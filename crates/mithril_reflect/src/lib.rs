//! The object model the mithril codec walks.
//!
//! A host type describes itself through:
//!
//! - [`TypePath`](info::TypePath): a stable string identifier, used as the
//!   type tag of encoded composites.
//! - [`Typed`](info::Typed): static [`TypeInfo`](info::TypeInfo), including
//!   the ordered field-descriptor table of composite types.
//! - [`Reflect`]: dynamic access to a live value, split by kind through
//!   [`ReflectRef`](ops::ReflectRef) and [`ReflectMut`](ops::ReflectMut).
//! - [`GetTypeMeta`](registry::GetTypeMeta): the registration entry put
//!   into a [`TypeRegistry`](registry::TypeRegistry), which maps type tags
//!   back to factories.
//!
//! All of these are generated by [`#[derive(Reflect)]`](derive::Reflect).
//!
//! # Example
//!
//! ```
//! use mithril_reflect::derive::Reflect;
//! use mithril_reflect::info::Typed;
//! use mithril_reflect::registry::TypeRegistry;
//!
//! #[derive(Reflect, Default)]
//! #[reflect(type_path = "game::Crate")]
//! pub struct Crate {
//!     pub label: String,
//!     #[reflect(formerly = "count")]
//!     pub capacity: u32,
//!     cache: Vec<u8>,
//! }
//!
//! let info = Crate::type_info().as_composite().unwrap();
//! assert_eq!(info.field_len(), 2);
//! assert_eq!(info.resolve_field("count").unwrap().name(), "capacity");
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Crate>();
//! assert!(registry.get_with_type_path("game::Crate").is_some());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

extern crate alloc;

// The derive macro emits `::mithril_reflect` paths, which must also resolve
// inside this crate's own tests.
extern crate self as mithril_reflect;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod math;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use mithril_reflect_derive as derive;
pub use reflection::{Reflect, SerializationHooks};
