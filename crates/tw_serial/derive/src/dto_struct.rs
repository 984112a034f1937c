use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, GenericArgument, Ident, LitStr, PathArguments, Type};

use crate::DTO_ATTRIBUTE_NAME;

/// Field constraints named in `#[dto(...)]`.
#[derive(Default, Debug)]
pub(crate) struct FieldRules {
    pub not_null: Option<Span>,
    pub not_empty: Option<Span>,
    pub not_blank: Option<Span>,
}

/// One named field of a DTO.
#[derive(Debug)]
pub(crate) struct DtoField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// `Some(T)` for a field of type `Option<T>`.
    pub optional: Option<&'a Type>,
    /// The member name on the wire.
    pub name: String,
    pub rules: FieldRules,
}

/// A struct accepted by `#[derive(Dto)]`.
pub(crate) struct DtoStruct<'a> {
    pub ast: &'a DeriveInput,
    pub fields: Vec<DtoField<'a>>,
}

impl<'a> DtoStruct<'a> {
    pub fn parse(ast: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Dto` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Dto` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Dto` cannot be derived for unions",
                ));
            }
        };

        let mut fields = Vec::with_capacity(named.named.len());
        let mut errors: Option<syn::Error> = None;

        for field in &named.named {
            // Named fields always carry an ident.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };

            match DtoField::parse(ident, field) {
                Ok(field) => fields.push(field),
                Err(err) => match &mut errors {
                    Some(errors) => errors.combine(err),
                    None => errors = Some(err),
                },
            }
        }

        if let Some(errors) = errors {
            return Err(errors);
        }

        Ok(Self { ast, fields })
    }

    /// The types that must implement `Serial` for the impl to hold.
    pub fn value_types(&self) -> impl Iterator<Item = &'a Type> + '_ {
        self.fields
            .iter()
            .map(|field| field.optional.unwrap_or(field.ty))
    }
}

impl<'a> DtoField<'a> {
    fn parse(ident: &'a Ident, field: &'a syn::Field) -> syn::Result<Self> {
        let mut name: Option<String> = None;
        let mut rules = FieldRules::default();

        for attr in &field.attrs {
            if !attr.path().is_ident(DTO_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if name.is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }
                    name = Some(lit.value());
                } else if meta.path.is_ident("not_null") {
                    rules.not_null = Some(span);
                } else if meta.path.is_ident("not_empty") {
                    rules.not_empty = Some(span);
                } else if meta.path.is_ident("not_blank") {
                    rules.not_blank = Some(span);
                } else {
                    return Err(meta.error(
                        "unknown `dto` attribute, expected `rename`, `not_null`, `not_empty` or `not_blank`",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(Self {
            ident,
            ty: &field.ty,
            optional: option_inner(&field.ty),
            name: name.unwrap_or_else(|| ident.unraw().to_string()),
            rules,
        })
    }
}

/// Returns `T` when `ty` is spelled `Option<T>` (with any path prefix).
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }

    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }

    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{DtoStruct, option_inner};
    use quote::ToTokens;
    use syn::{DeriveInput, Type, parse_quote};

    #[test]
    fn detects_option() {
        let ty: Type = parse_quote!(Option<u8>);
        assert!(option_inner(&ty).is_some());
        let ty: Type = parse_quote!(core::option::Option<Vec<u8>>);
        assert_eq!(
            option_inner(&ty).map(|t| t.to_token_stream().to_string()),
            Some(String::from("Vec < u8 >"))
        );
        let ty: Type = parse_quote!(Vec<u8>);
        assert!(option_inner(&ty).is_none());
        let ty: Type = parse_quote!(Option);
        assert!(option_inner(&ty).is_none());
    }

    #[test]
    fn parses_attributes() {
        let ast: DeriveInput = parse_quote! {
            struct User {
                #[dto(rename = "mail", not_blank)]
                email: Option<String>,
                #[dto(not_null)]
                #[dto(not_empty)]
                r#type: String,
            }
        };
        let dto = DtoStruct::parse(&ast).unwrap();
        assert_eq!(dto.fields.len(), 2);
        assert_eq!(dto.fields[0].name, "mail");
        assert!(dto.fields[0].optional.is_some());
        assert!(dto.fields[0].rules.not_blank.is_some());
        assert_eq!(dto.fields[1].name, "type");
        assert!(dto.fields[1].rules.not_null.is_some());
        assert!(dto.fields[1].rules.not_empty.is_some());
        assert_eq!(dto.value_types().count(), 2);
    }

    #[test]
    fn rejects_other_shapes() {
        let ast: DeriveInput = parse_quote!(struct Pair(u8, u8););
        assert!(DtoStruct::parse(&ast).is_err());
        let ast: DeriveInput = parse_quote!(enum E { A });
        assert!(DtoStruct::parse(&ast).is_err());
        let ast: DeriveInput = parse_quote! {
            struct S {
                #[dto(skip)]
                a: u8,
            }
        };
        assert!(DtoStruct::parse(&ast).is_err());
    }
}
