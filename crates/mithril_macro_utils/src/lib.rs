//! Helpers for the mithril proc-macro crates.
//!
//! [`Manifest`] reads the caller's `Cargo.toml` so generated code can name
//! `mithril_reflect` directly or through the `mithril` facade.

mod manifest;

pub use manifest::Manifest;
