#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod escape;
mod literal;
mod primitive;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::ParseError;
pub use escape::{escape, escape_into, quote_into};
pub use literal::{is_json_literal, is_json_number};
pub use primitive::Primitive;
