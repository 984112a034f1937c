//! Derive macros for `tw_serial`.
//!
//! - [`Serial`]: opt a type with a hand-written `UserDefined` impl into the engine.
//! - [`Dto`]: generate `UserDefined` and `Serial` for a struct with named fields.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static DTO_ATTRIBUTE_NAME: &str = "dto";

// -----------------------------------------------------------------------------
// Modules

mod dto_struct;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// Binds a type to the `UserDefined` category.
///
/// The type must implement `tw_serial::UserDefined` itself; the derive only
/// adds the `Serial` impl that routes to it.
///
/// ```rust, ignore
/// #[derive(Serial)]
/// struct Celsius(f32);
///
/// impl UserDefined for Celsius {
///     fn encode(&self) -> String { /* ... */ }
///     fn decode(text: &str) -> Result<Self, Error> { /* ... */ }
/// }
/// ```
///
/// Generic types are supported. The generated impl requires the type to be
/// `UserDefined` for the given parameters.
#[proc_macro_derive(Serial)]
pub fn derive_serial(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let tw_serial_path = path::tw_serial();

    impls::impl_serial(&ast, &tw_serial_path).into()
}

/// Derives a JSON object encoding for a struct with named fields.
///
/// Each field becomes one member, in declaration order. `Option<T>` fields
/// encode `None` as `null` and accept a missing or `null` member on decode.
/// Every other field is required.
///
/// ## Field attributes
///
/// - `#[dto(rename = "name")]`: use `name` as the member name.
/// - `#[dto(not_null)]`: the member must be present and not `null`.
/// - `#[dto(not_empty)]`: as `not_null`, and the member must not be `""`,
///   `[]` or `{}`.
/// - `#[dto(not_blank)]`: as `not_null`, and the member must not be only
///   whitespace.
///
/// All rules are checked before any field is decoded, and every failure is
/// reported together.
///
/// ```rust, ignore
/// #[derive(Dto)]
/// struct User {
///     #[dto(not_blank)]
///     name: String,
///     #[dto(rename = "mail")]
///     email: Option<String>,
/// }
/// ```
///
/// Tuple structs, unit structs, enums and unions are rejected.
#[proc_macro_derive(Dto, attributes(dto))]
pub fn derive_dto(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let dto = match dto_struct::DtoStruct::parse(&ast) {
        Ok(dto) => dto,
        Err(err) => return err.into_compile_error().into(),
    };

    let tw_serial_path = path::tw_serial();

    impls::impl_dto(&dto, &tw_serial_path).into()
}
