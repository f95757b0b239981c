use crate::derive_data::ReflectMeta;

/// Generates the `inventory` submission of `#[reflect(auto_register)]`.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ReflectMeta) -> proc_macro2::TokenStream {
    let Some(span) = meta.attrs().auto_register else {
        return crate::utils::empty();
    };

    let auto_register_ = crate::path::auto_register_(meta.mithril_reflect_path());
    let ident = meta.ident();

    quote::quote_spanned! { span =>
        #auto_register_::inventory::submit! {
            #auto_register_::__AutoRegisterFunc(
                <#ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

/// `auto_register` feature disabled: the attribute is accepted and ignored.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
