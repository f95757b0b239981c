//! Small containers shared by the mithril crates.
//!
//! - [`hash`]: fixed-seed and no-op hashers, `HashMap`/`HashSet` aliases.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId).

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
