//! Paths into `tw_serial` used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the access path to the `tw_serial` crate from the caller.
///
/// 1. For crates that depend on `tw_serial`, `::tw_serial` is returned.
/// 2. For crates that depend on `textwire`, `::textwire::serial` is returned.
/// 3. Otherwise `::tw_serial` is returned, which may be incorrect.
///
/// This reads the caller's manifest, so call it once per macro invocation.
pub(crate) fn tw_serial() -> syn::Path {
    tw_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("tw_serial"))
}

#[inline(always)]
pub(crate) fn macro_exports_(tw_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #tw_serial_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn serial_(tw_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #tw_serial_path::Serial
    }
}

#[inline(always)]
pub(crate) fn user_defined_(tw_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #tw_serial_path::UserDefined
    }
}

#[inline(always)]
pub(crate) fn category_(tw_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #tw_serial_path::Category
    }
}

#[inline(always)]
pub(crate) fn error_(tw_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #tw_serial_path::Error
    }
}

#[inline(always)]
pub(crate) fn user_defined_codec_(tw_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #tw_serial_path::codec::user_defined
    }
}

#[inline(always)]
pub(crate) fn dto_(tw_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #tw_serial_path::dto
    }
}
