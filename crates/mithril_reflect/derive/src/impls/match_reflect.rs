use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectDerive;

/// Entry of `#[derive(Reflect)]`: parse, then generate by kind.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> TokenStream {
    let reflect_derive = match ReflectDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls: proc_macro2::TokenStream = match &reflect_derive {
        ReflectDerive::Composite(info) => super::impl_composite(info),
        ReflectDerive::Enum(info) => super::impl_enum(info),
    };

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
