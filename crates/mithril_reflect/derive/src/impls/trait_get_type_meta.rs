use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::Ident;

use crate::derive_data::ReflectMeta;

/// Generates the `GetTypeMeta` impl.
///
/// `with_default` adds the `TypeTraitDefault` factory; `dependencies` are
/// the types registered together with this one.
pub(crate) fn impl_trait_get_type_meta<'t>(
    meta: &ReflectMeta,
    with_default: bool,
    dependencies: impl Iterator<Item = &'t syn::Type>,
) -> TokenStream {
    let path = meta.mithril_reflect_path();
    let get_type_meta_ = crate::path::get_type_meta_(path);
    let type_meta_ = crate::path::type_meta_(path);
    let from_type_ = crate::path::from_type_(path);
    let type_registry_ = crate::path::type_registry_(path);

    let outer_ = Ident::new("__outer", Span::call_site());

    let (capacity, insert_default) = if with_default {
        let type_trait_default_ = crate::path::type_trait_default_(path);
        let insert = quote! {
            #type_meta_::insert_trait::<#type_trait_default_>(&mut #outer_, #from_type_::<Self>::from_type());
        };
        (1usize, insert)
    } else {
        (0usize, crate::utils::empty())
    };

    let registrations = dependencies
        .map(|ty| {
            quote_spanned! { syn::spanned::Spanned::span(ty) =>
                #type_registry_::register::<#ty>(registry);
            }
        })
        .collect::<Vec<_>>();

    let register_deps = if registrations.is_empty() {
        crate::utils::empty()
    } else {
        quote! {
            fn register_dependencies(registry: &mut #type_registry_) {
                #(#registrations)*
            }
        }
    };

    let ident = meta.ident();

    quote! {
        impl #get_type_meta_ for #ident {
            fn get_type_meta() -> #type_meta_ {
                let mut #outer_ = #type_meta_::with_capacity::<Self>(#capacity);
                #insert_default
                #outer_
            }

            #register_deps
        }
    }
}
