use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generates the `TypePath` impl.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let type_path_ = crate::path::type_path_(meta.mithril_reflect_path());

    let ident = meta.ident();
    let ident_str = ident.to_string();
    let type_path = meta.type_path();
    let type_name = meta.type_name();
    let module_path = meta.module_path();

    quote! {
        impl #type_path_ for #ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #ident_str
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                #module_path
            }
        }
    }
}
