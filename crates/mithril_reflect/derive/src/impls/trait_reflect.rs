use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generates the `Reflect` impl; `kind` names the `ReflectRef`/`ReflectMut`
/// variant that views the value.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta, kind: Ident) -> TokenStream {
    let path = meta.mithril_reflect_path();
    let reflect_ = crate::path::reflect_(path);
    let reflect_ref_ = crate::path::reflect_ref_(path);
    let reflect_mut_ = crate::path::reflect_mut_(path);
    let box_ = crate::path::box_(path);

    let ident = meta.ident();

    quote! {
        impl #reflect_ for #ident {
            fn set(
                &mut self,
                value: #box_<dyn #reflect_>,
            ) -> ::core::result::Result<(), #box_<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#kind(self)
            }
        }
    }
}
