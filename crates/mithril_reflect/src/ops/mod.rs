//! Kind-specific data access.
//!
//! ## Menu
//!
//! - [`ReflectRef`] / [`ReflectMut`]: a value split by kind.
//! - [`ScalarRef`]: a borrowed primitive.
//! - [`Composite`]: named structs, field access by name plus serialization hooks.
//! - [`List`]: growable collections and fixed-size arrays.
//! - [`Enum`]: field-less enumerations.

// -----------------------------------------------------------------------------
// Modules

mod composite_ops;
mod enum_ops;
mod kind;
mod list_ops;

// -----------------------------------------------------------------------------
// Exports

pub use composite_ops::Composite;
pub use enum_ops::Enum;
pub use kind::{ReflectMut, ReflectRef, ScalarRef};
pub use list_ops::{List, ListItemIter};
