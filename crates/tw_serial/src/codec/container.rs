//! Sequences and maps.
//!
//! A sequence becomes a JSON array. A map becomes an array of
//! `{"key":..,"value":..}` objects, one per entry, because keys may be of any
//! category and a JSON object only allows string keys.
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! assert_eq!(tw_serial::serialize(&vec![vec![1, 2], vec![3]]), "[[1,2],[3]]");
//!
//! let map = BTreeMap::from([("a".to_string(), 1)]);
//! assert_eq!(tw_serial::serialize(&map), r#"[{"key":"a","value":1}]"#);
//! ```

use alloc::string::String;

use crate::{Map, Sequence, Serial};

// -----------------------------------------------------------------------------
// Placement

/// Appends encoded `text` to `out` as one JSON element.
///
/// The text is spliced verbatim when it already reads as JSON:
///
/// - it starts with `{` or `[` (a nested object or array);
/// - it starts and ends with `"` (an already quoted string);
/// - it is a bare literal: a number, `true`, `false` or `null`.
///
/// Anything else is escaped and wrapped in quotes.
///
/// ```
/// use tw_serial::codec::container::place_into;
///
/// let mut out = String::new();
/// place_into("[1]", &mut out);
/// place_into("12", &mut out);
/// place_into("two words", &mut out);
/// assert_eq!(out, r#"[1]12"two words""#);
/// ```
pub fn place_into(text: &str, out: &mut String) {
    let bytes = text.as_bytes();

    let verbatim = matches!(bytes.first(), Some(b'{' | b'['))
        || (bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"')
        || tw_text::is_json_literal(text);

    if verbatim {
        out.push_str(text);
    } else {
        tw_text::quote_into(text, out);
    }
}

// -----------------------------------------------------------------------------
// Encoders

/// Encodes a sequence as `[e0,e1,...]`. An empty sequence is `[]`.
pub fn encode_sequence<S: Sequence + ?Sized>(sequence: &S) -> String {
    let mut out = String::from("[");
    for (idx, item) in sequence.items().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        item.place_into(&mut out);
    }
    out.push(']');
    out
}

/// Encodes a map as `[{"key":k0,"value":v0},...]`. An empty map is `[]`.
pub fn encode_map<M: Map + ?Sized>(map: &M) -> String {
    let mut out = String::from("[");
    for (idx, (key, value)) in map.entries().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push_str("{\"key\":");
        key.place_into(&mut out);
        out.push_str(",\"value\":");
        value.place_into(&mut out);
        out.push('}');
    }
    out.push(']');
    out
}
