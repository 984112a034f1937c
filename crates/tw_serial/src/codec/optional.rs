//! Nullable wrappers.
//!
//! An absent value encodes as the empty text, and a present one encodes
//! exactly like its inner value. So `None` and `Some(String::new())`
//! produce the same output: round-tripping an optional empty string is lossy.
//!
//! ```
//! assert_eq!(tw_serial::serialize(&None::<String>), "");
//! assert_eq!(tw_serial::serialize(&Some(String::new())), "");
//! assert_eq!(tw_serial::serialize(&Some(5_u8)), "5");
//! ```

use alloc::string::String;

use crate::{Optional, Serial};

/// Encodes an optional value.
pub fn encode<O: Optional + ?Sized>(value: &O) -> String {
    match value.get() {
        Some(inner) => inner.serialize(),
        None => String::new(),
    }
}

/// Places an optional value inside a structure.
///
/// A present value is placed as its inner value would be. An absent one is
/// placed like its empty encoding, which is the quoted empty string.
pub fn place_into<O: Optional + ?Sized>(value: &O, out: &mut String) {
    match value.get() {
        Some(inner) => inner.place_into(out),
        None => super::container::place_into("", out),
    }
}
