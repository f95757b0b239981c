use proc_macro2::TokenStream;

/// An empty token stream, for optional generated items.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}
