use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, LitStr};

use super::{get_auto_register_impl, impl_trait_get_type_meta};
use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectStruct;

/// Implements full reflection for a struct with named fields or a unit struct.
pub(crate) fn impl_composite(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, composite_info_tokens(info));
    let reflect_trait_tokens = impl_trait_reflect(meta, Ident::new("Composite", Span::call_site()));
    let composite_trait_tokens = impl_trait_composite(info);

    let dependencies = info
        .base()
        .into_iter()
        .chain(info.eligible_fields())
        .map(|field| field.ty());
    let get_type_meta_tokens = impl_trait_get_type_meta(meta, true, dependencies);

    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens

        #composite_trait_tokens

        #get_type_meta_tokens

        #auto_register_tokens
    }
}

/// The `TypeInfo::Composite(...)` expression.
fn composite_info_tokens(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let path = meta.mithril_reflect_path();
    let type_info_ = crate::path::type_info_(path);
    let typed_ = crate::path::typed_(path);
    let composite_info_ = crate::path::composite_info_(path);
    let field_info_ = crate::path::field_info_(path);

    let fields = info.eligible_fields().map(|field| {
        let ty = field.ty();
        let name = field.name();
        let with_aliases = if field.attrs.formerly.is_empty() {
            crate::utils::empty()
        } else {
            let aliases = &field.attrs.formerly;
            quote!(.with_aliases(&[#(#aliases),*]))
        };
        quote! {
            #field_info_::new::<#ty>(#name) #with_aliases
        }
    });

    let with_base = match info.base() {
        Some(base) => {
            let ty = base.ty();
            quote!(.with_base(<#ty as #typed_>::type_info()))
        }
        None => crate::utils::empty(),
    };

    let with_aliases = if meta.attrs().formerly.is_empty() {
        crate::utils::empty()
    } else {
        let aliases = meta.aliases();
        quote!(.with_aliases(#aliases))
    };

    quote! {
        #type_info_::Composite(
            #composite_info_::new::<Self>(&[#(#fields),*])
                #with_base
                #with_aliases
        )
    }
}

/// Generates the `Composite` impl.
///
/// Names not declared locally fall through to the base.
fn impl_trait_composite(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let path = meta.mithril_reflect_path();
    let composite_ = crate::path::composite_(path);
    let reflect_ = crate::path::reflect_(path);

    let (names, members): (Vec<LitStr>, Vec<&Ident>) = info
        .eligible_fields()
        .filter_map(|field| {
            let member = field.data.ident.as_ref()?;
            Some((LitStr::new(&field.name(), member.span()), member))
        })
        .unzip();

    let (fallback_ref, fallback_mut) = match info.base().and_then(|b| Some((b.ty(), b.data.ident.as_ref()?))) {
        Some((ty, member)) => (
            quote!(<#ty as #composite_>::field(&self.#member, name)),
            quote!(<#ty as #composite_>::field_mut(&mut self.#member, name)),
        ),
        None => (
            quote!(::core::option::Option::None),
            quote!(::core::option::Option::None),
        ),
    };

    let hooks = if meta.attrs().hooks.is_some() {
        let hooks_ = crate::path::serialization_hooks_(path);
        quote! {
            #[inline]
            fn before_encode(&mut self) {
                <Self as #hooks_>::before_encode(self);
            }

            #[inline]
            fn after_decode(&mut self) {
                <Self as #hooks_>::after_decode(self);
            }
        }
    } else {
        crate::utils::empty()
    };

    let ident = meta.ident();

    quote! {
        impl #composite_ for #ident {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#names => ::core::option::Option::Some(#reflect_::as_reflect(&self.#members)),)*
                    _ => #fallback_ref,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn #reflect_> {
                match name {
                    #(#names => ::core::option::Option::Some(#reflect_::as_reflect_mut(&mut self.#members)),)*
                    _ => #fallback_mut,
                }
            }

            #hooks
        }
    }
}
