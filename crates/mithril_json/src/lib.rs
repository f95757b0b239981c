//! Text codec for reflected value graphs.
//!
//! The format is a JSON dialect tuned for round-tripping typed objects:
//!
//! - scalars are bare literals, strings and chars are quoted and escaped;
//! - enums are their quoted variant name;
//! - lists and arrays are `[e1,e2,...]`, `null` is an empty option;
//! - composites are wrapped as `{"TYPE":"<tag>","DATA":{<fields>}}`, where
//!   the tag names the concrete type so polymorphic `Box<dyn Reflect>` slots
//!   decode back into the right type.
//!
//! [`Translator`] drives both directions against a
//! [`TypeRegistry`](mithril_reflect::registry::TypeRegistry). Types the
//! generic rules cannot express get a [`JsonOverride`] in the translator's
//! [`Overrides`] table.
//!
//! The lower layers are public for callers that need to read the format
//! without a registry: [`scan`] splits text at top-level separators,
//! [`escape`] quotes and unquotes literals, [`primitive`] handles scalar
//! and enum literals.
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod array;
mod error;
mod hooks;
mod object;
mod translator;
mod writer;

pub mod escape;
pub mod overrides;
pub mod primitive;
pub mod scan;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::{DecodeError, EncodeError};
pub use hooks::fire_before_encode;
pub use object::{DATA_KEY, TYPE_KEY};
pub use overrides::{JsonOverride, Overrides};
pub use translator::{Indent, MAX_DEPTH, Translator, TranslatorConfig};
