//! Paths to `mithril_reflect` items used by generated code.
//!
//! Kept in one place so that moving an item in `mithril_reflect` only needs
//! one change here.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Returns how the caller reaches `mithril_reflect`.
///
/// Reads the caller's `Cargo.toml`: a direct dependency gives
/// `::mithril_reflect`, a dependency on the facade gives
/// `::mithril::reflect`. See [`mithril_macro_utils::Manifest`].
///
/// The lookup touches the file system, so the result is computed once per
/// derive and passed around.
pub(crate) fn mithril_reflect() -> syn::Path {
    mithril_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("mithril_reflect"))
}

// -----------------------------------------------------------------------------
// Root

#[inline(always)]
pub(crate) fn reflect_(path: &syn::Path) -> TokenStream {
    quote!(#path::Reflect)
}

#[inline(always)]
pub(crate) fn serialization_hooks_(path: &syn::Path) -> TokenStream {
    quote!(#path::SerializationHooks)
}

#[inline(always)]
pub(crate) fn box_(path: &syn::Path) -> TokenStream {
    quote!(#path::__macro_exports::Box)
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(path: &syn::Path) -> TokenStream {
    quote!(#path::__macro_exports::auto_register)
}

// -----------------------------------------------------------------------------
// info

#[inline(always)]
pub(crate) fn type_path_(path: &syn::Path) -> TokenStream {
    quote!(#path::info::TypePath)
}

#[inline(always)]
pub(crate) fn typed_(path: &syn::Path) -> TokenStream {
    quote!(#path::info::Typed)
}

#[inline(always)]
pub(crate) fn type_info_(path: &syn::Path) -> TokenStream {
    quote!(#path::info::TypeInfo)
}

#[inline(always)]
pub(crate) fn composite_info_(path: &syn::Path) -> TokenStream {
    quote!(#path::info::CompositeInfo)
}

#[inline(always)]
pub(crate) fn field_info_(path: &syn::Path) -> TokenStream {
    quote!(#path::info::FieldInfo)
}

#[inline(always)]
pub(crate) fn enum_info_(path: &syn::Path) -> TokenStream {
    quote!(#path::info::EnumInfo)
}

#[inline(always)]
pub(crate) fn variant_info_(path: &syn::Path) -> TokenStream {
    quote!(#path::info::VariantInfo)
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(path: &syn::Path) -> TokenStream {
    quote!(#path::impls::NonGenericTypeInfoCell)
}

// -----------------------------------------------------------------------------
// ops

#[inline(always)]
pub(crate) fn composite_(path: &syn::Path) -> TokenStream {
    quote!(#path::ops::Composite)
}

#[inline(always)]
pub(crate) fn enum_(path: &syn::Path) -> TokenStream {
    quote!(#path::ops::Enum)
}

#[inline(always)]
pub(crate) fn reflect_ref_(path: &syn::Path) -> TokenStream {
    quote!(#path::ops::ReflectRef)
}

#[inline(always)]
pub(crate) fn reflect_mut_(path: &syn::Path) -> TokenStream {
    quote!(#path::ops::ReflectMut)
}

// -----------------------------------------------------------------------------
// registry

#[inline(always)]
pub(crate) fn type_meta_(path: &syn::Path) -> TokenStream {
    quote!(#path::registry::TypeMeta)
}

#[inline(always)]
pub(crate) fn get_type_meta_(path: &syn::Path) -> TokenStream {
    quote!(#path::registry::GetTypeMeta)
}

#[inline(always)]
pub(crate) fn from_type_(path: &syn::Path) -> TokenStream {
    quote!(#path::registry::FromType)
}

#[inline(always)]
pub(crate) fn type_registry_(path: &syn::Path) -> TokenStream {
    quote!(#path::registry::TypeRegistry)
}

#[inline(always)]
pub(crate) fn type_trait_default_(path: &syn::Path) -> TokenStream {
    quote!(#path::registry::TypeTraitDefault)
}
