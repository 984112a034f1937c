//! Delegation to a type's own [`UserDefined`] capability.

use alloc::string::String;

use crate::{Error, UserDefined};

/// Calls [`UserDefined::encode`].
#[inline]
pub fn encode<U: UserDefined>(value: &U) -> String {
    value.encode()
}

/// Calls [`UserDefined::decode`]. Its error is returned unchanged.
#[inline]
pub fn decode<U: UserDefined>(text: &str) -> Result<U, Error> {
    U::decode(text)
}
