use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::dto_struct::{DtoField, DtoStruct};

/// Generate `UserDefined` and `Serial` for a DTO.
pub(crate) fn impl_dto(dto: &DtoStruct, tw_serial_path: &syn::Path) -> TokenStream {
    let macro_exports_ = crate::path::macro_exports_(tw_serial_path);
    let serial_ = crate::path::serial_(tw_serial_path);
    let user_defined_ = crate::path::user_defined_(tw_serial_path);
    let error_ = crate::path::error_(tw_serial_path);
    let dto_ = crate::path::dto_(tw_serial_path);

    let ast = dto.ast;
    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let mut predicates: Vec<TokenStream> = where_clause
        .map(|clause| clause.predicates.iter().map(|p| quote!(#p)).collect())
        .unwrap_or_default();
    if !ast.generics.params.is_empty() {
        predicates.extend(dto.value_types().map(|ty| quote!(#ty: #serial_)));
    }

    let writes = dto.fields.iter().map(|field| {
        let member = field.ident;
        let name = &field.name;
        if field.optional.is_some() {
            quote! {
                __writer.optional(#name, #macro_exports_::Option::as_ref(&self.#member));
            }
        } else {
            quote! {
                __writer.field(#name, &self.#member);
            }
        }
    });

    let checks = dto.fields.iter().map(|field| field_checks(field, &dto_));

    let reads = dto.fields.iter().map(|field| {
        let member = field.ident;
        let name = &field.name;
        match field.optional {
            Some(inner) => quote! {
                #member: __fields.optional::<#inner>(#name)?
            },
            None => {
                let ty = field.ty;
                quote! {
                    #member: __fields.required::<#ty>(#name)?
                }
            }
        }
    });

    let user_defined_impl = quote! {
        impl #impl_generics #user_defined_ for #ident #ty_generics
        where
            #(#predicates,)*
        {
            fn encode(&self) -> #macro_exports_::String {
                #[allow(unused_mut)]
                let mut __writer = #dto_::ObjectWriter::new();
                #(#writes)*
                __writer.finish()
            }

            fn decode(__text: &str) -> #macro_exports_::Result<Self, #error_> {
                let __fields = #dto_::Fields::parse(__text)?;

                #[allow(unused_mut)]
                let mut __violations = #macro_exports_::Vec::new();
                #(#checks)*
                __fields.validated(__violations)?;

                #macro_exports_::Result::Ok(Self {
                    #(#reads,)*
                })
            }
        }
    };

    let serial_impl = crate::impls::impl_serial(ast, tw_serial_path);

    quote! {
        #user_defined_impl

        #serial_impl
    }
}

fn field_checks(field: &DtoField, dto_: &TokenStream) -> TokenStream {
    let name = &field.name;
    let rules = [
        (field.rules.not_null, quote!(NotNull)),
        (field.rules.not_empty, quote!(NotEmpty)),
        (field.rules.not_blank, quote!(NotBlank)),
    ];

    let mut tokens = TokenStream::new();
    for (span, rule) in rules {
        if let Some(span) = span {
            tokens.extend(quote_spanned! { span =>
                __fields.check(#name, #dto_::Rule::#rule, &mut __violations);
            });
        }
    }
    tokens
}
