use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generates the `Typed` impl around a `TypeInfo` expression.
///
/// The info is built on first access and cached in a static cell.
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, type_info_tokens: TokenStream) -> TokenStream {
    let path = meta.mithril_reflect_path();
    let typed_ = crate::path::typed_(path);
    let type_info_ = crate::path::type_info_(path);
    let cell_ = crate::path::non_generic_type_info_cell_(path);

    let ident = meta.ident();

    quote! {
        impl #typed_ for #ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #cell_ = #cell_::new();
                CELL.get_or_init(|| #type_info_tokens)
            }
        }
    }
}
