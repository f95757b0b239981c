//! Mithril: reflection-driven object serialization and field mirroring.
//!
//! This facade re-exports the member crates under short names:
//!
//! - [`reflect`]: the object model (type paths, field tables, type registry).
//! - [`json`]: the text codec that encodes and decodes reflected values.
//! - [`mirror`]: per-field snapshots that survive reload boundaries.
//! - [`utils`]: hash containers shared by the other crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use mithril_json as json;
pub use mithril_mirror as mirror;
pub use mithril_reflect as reflect;
pub use mithril_utils as utils;

/// Most commonly used items.
pub mod prelude {
    pub use mithril_json::{Translator, TranslatorConfig};
    pub use mithril_mirror::{Mirror, MirrorHost, MirrorHostExt};
    pub use mithril_reflect::derive::Reflect;
    pub use mithril_reflect::ops::Composite;
    pub use mithril_reflect::registry::TypeRegistry;
    pub use mithril_reflect::{Reflect, SerializationHooks};
}
