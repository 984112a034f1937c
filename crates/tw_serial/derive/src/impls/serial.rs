use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Generate `Serial` routing to the type's `UserDefined` impl.
///
/// A generic type gets a `Self: UserDefined` style bound, so the impl
/// holds exactly when the hand-written capability does.
pub(crate) fn impl_serial(ast: &DeriveInput, tw_serial_path: &syn::Path) -> TokenStream {
    let macro_exports_ = crate::path::macro_exports_(tw_serial_path);
    let serial_ = crate::path::serial_(tw_serial_path);
    let user_defined_ = crate::path::user_defined_(tw_serial_path);
    let category_ = crate::path::category_(tw_serial_path);
    let error_ = crate::path::error_(tw_serial_path);
    let codec_ = crate::path::user_defined_codec_(tw_serial_path);

    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let mut predicates: Vec<TokenStream> = where_clause
        .map(|clause| clause.predicates.iter().map(|p| quote!(#p)).collect())
        .unwrap_or_default();
    if !ast.generics.params.is_empty() {
        predicates.push(quote!(#ident #ty_generics: #user_defined_));
    }

    quote! {
        impl #impl_generics #serial_ for #ident #ty_generics
        where
            #(#predicates,)*
        {
            const CATEGORY: #category_ = #category_::UserDefined;

            #[inline]
            fn serialize(&self) -> #macro_exports_::String {
                #codec_::encode(self)
            }

            #[inline]
            fn deserialize(text: &str) -> #macro_exports_::Result<Self, #error_> {
                #codec_::decode(text)
            }
        }
    }
}
