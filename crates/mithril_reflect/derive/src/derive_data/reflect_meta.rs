use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, LitStr, Path};

use super::TypeAttributes;

/// Everything about the derived type that is not specific to its kind.
pub(crate) struct ReflectMeta<'a> {
    mithril_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("mithril_reflect_path", &self.mithril_reflect_path.to_token_stream())
            .field("ident", self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident) -> Self {
        Self {
            mithril_reflect_path: crate::path::mithril_reflect(),
            attrs,
            ident,
        }
    }

    #[inline]
    pub fn mithril_reflect_path(&self) -> &Path {
        &self.mithril_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// The full type path expression.
    ///
    /// Without `#[reflect(type_path = "...")]` this is
    /// `concat!(module_path!(), "::", "Ident")`, evaluated at the caller.
    pub fn type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => lit.to_token_stream(),
            None => {
                let ident = self.ident.to_string();
                quote! {
                    ::core::concat!(::core::module_path!(), "::", #ident)
                }
            }
        }
    }

    /// The last segment of the type path.
    pub fn type_name(&self) -> LitStr {
        match &self.attrs.type_path {
            Some(lit) => {
                let value = lit.value();
                let name = value.rsplit("::").next().unwrap_or(&value);
                LitStr::new(name, lit.span())
            }
            None => LitStr::new(&self.ident.to_string(), self.ident.span()),
        }
    }

    /// An `Option<&'static str>` expression for the module path.
    pub fn module_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => match lit.value().rsplit_once("::") {
                Some((module, _)) => {
                    let module = LitStr::new(module, lit.span());
                    quote!(::core::option::Option::Some(#module))
                }
                None => quote!(::core::option::Option::None),
            },
            None => quote!(::core::option::Option::Some(::core::module_path!())),
        }
    }

    /// A `&'static [&'static str]` expression of former type paths.
    pub fn aliases(&self) -> TokenStream {
        let aliases = &self.attrs.formerly;
        quote!(&[#(#aliases),*])
    }
}
