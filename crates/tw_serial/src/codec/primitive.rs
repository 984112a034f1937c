//! Scalar values.

use alloc::string::String;

use tw_text::Primitive;

use crate::Error;

/// Canonical text of a primitive value.
#[inline]
pub fn encode<P: Primitive>(value: &P) -> String {
    value.encode()
}

/// Parses a primitive value, reporting failures as
/// [`Error::InvalidArgument`].
#[inline]
pub fn decode<P: Primitive>(text: &str) -> Result<P, Error> {
    P::decode(text).map_err(Error::InvalidArgument)
}

/// Appends text-valued primitives to a structure: always quoted and escaped.
#[inline]
pub fn place_text_into(text: &str, out: &mut String) {
    tw_text::quote_into(text, out);
}
