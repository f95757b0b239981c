//! Field mirrors: per-field snapshots of a composite, kept as encoded text.
//!
//! A [`Mirror`] shadows the eligible fields of a host value so its state
//! survives a boundary where the live representation is thrown away, such
//! as a reload. The snapshot is plain text produced by
//! [`mithril_json`], so it is polymorphism-safe and can be applied to a
//! renamed or restructured type: entries resolve by field name first, then
//! by the field's `formerly` aliases.
//!
//! Hosts that own their mirror implement [`MirrorHost`] and get the
//! self-targeting operations of [`MirrorHostExt`].
//!
//! Mirrors implement `serde::Serialize` and `serde::Deserialize`, so a host
//! can persist one with any serde format.
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod host;
mod mirror;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::MirrorError;
pub use host::{MirrorHost, MirrorHostExt};
pub use mirror::{FieldSnapshot, Mirror, MirrorState};
