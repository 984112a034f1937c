//! Field predicates for hand-written or generated `decode` logic.
//!
//! The engine never calls these. A type calls them from its own
//! [`UserDefined::decode`](crate::UserDefined::decode) before building a value,
//! and `#[derive(Dto)]` does the same for its `not_null`, `not_empty` and
//! `not_blank` field attributes.
//!
//! ```
//! use tw_serial::validate::{not_blank, not_empty, not_null};
//!
//! assert!(not_null(Some(&3)));
//! assert!(!not_null(None::<&u8>));
//! assert!(not_empty(" "));
//! assert!(!not_empty("[]"));
//! assert!(!not_blank(" \t"));
//! ```

/// `true` when a value is present.
#[inline]
pub fn not_null<T>(value: Option<T>) -> bool {
    value.is_some()
}

/// `true` when `text` has content.
///
/// The encodings of empty collections, `[]` and `{}`, count as empty too.
#[inline]
pub fn not_empty(text: &str) -> bool {
    !matches!(text, "" | "[]" | "{}")
}

/// `true` when `text` contains something other than whitespace.
#[inline]
pub fn not_blank(text: &str) -> bool {
    !text.trim().is_empty()
}
