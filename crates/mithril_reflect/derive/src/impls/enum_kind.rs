use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{get_auto_register_impl, impl_trait_get_type_meta};
use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectEnum;

/// Implements full reflection for an enum whose variants carry no data.
pub(crate) fn impl_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, enum_info_tokens(info));
    let reflect_trait_tokens = impl_trait_reflect(meta, Ident::new("Enum", Span::call_site()));
    let enum_trait_tokens = impl_trait_enum(info);
    // No factory: decoding builds variants through `EnumInfo::construct`.
    let get_type_meta_tokens = impl_trait_get_type_meta(meta, false, core::iter::empty());
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens

        #enum_trait_tokens

        #get_type_meta_tokens

        #auto_register_tokens
    }
}

/// The `TypeInfo::Enum(...)` expression, with the by-index constructor.
fn enum_info_tokens(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();
    let path = meta.mithril_reflect_path();
    let type_info_ = crate::path::type_info_(path);
    let enum_info_ = crate::path::enum_info_(path);
    let variant_info_ = crate::path::variant_info_(path);
    let reflect_ = crate::path::reflect_(path);
    let box_ = crate::path::box_(path);

    let ident = meta.ident();
    let variants = info.variants().iter().map(|v| &v.ident).collect::<Vec<_>>();
    let names = variants.iter().map(ToString::to_string);
    let indices = 0..variants.len();

    let with_aliases = if meta.attrs().formerly.is_empty() {
        crate::utils::empty()
    } else {
        let aliases = meta.aliases();
        quote!(.with_aliases(#aliases))
    };

    quote! {{
        fn from_index(index: usize) -> ::core::option::Option<#box_<dyn #reflect_>> {
            let value: #box_<dyn #reflect_> = match index {
                #(#indices => #box_::new(#ident::#variants),)*
                _ => return ::core::option::Option::None,
            };
            ::core::option::Option::Some(value)
        }

        #type_info_::Enum(
            #enum_info_::new::<Self>(
                &[#(#variant_info_::new(#names, #ident::#variants as i64)),*],
                from_index,
            )
            #with_aliases
        )
    }}
}

/// Generates the `Enum` impl.
fn impl_trait_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();
    let enum_ = crate::path::enum_(meta.mithril_reflect_path());

    let ident = meta.ident();
    let variants = info.variants().iter().map(|v| &v.ident).collect::<Vec<_>>();
    let names = variants.iter().map(ToString::to_string).collect::<Vec<_>>();
    let indices = 0..variants.len();

    quote! {
        impl #enum_ for #ident {
            fn variant_name(&self) -> &'static str {
                match self {
                    #(Self::#variants => #names,)*
                }
            }

            fn variant_index(&self) -> usize {
                match self {
                    #(Self::#variants => #indices,)*
                }
            }

            fn discriminant(&self) -> i64 {
                match self {
                    #(Self::#variants => Self::#variants as i64,)*
                }
            }
        }
    }
}
