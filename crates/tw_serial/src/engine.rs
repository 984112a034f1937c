use alloc::string::String;

use crate::{Error, Serial};

/// Encodes `value` as wire-format text.
///
/// The static type of `value` picks the codec: primitives render as their
/// canonical text, optionals as their inner text (or nothing), sequences and
/// maps as JSON arrays, user-defined types through their own `encode`.
///
/// ```
/// use std::collections::BTreeMap;
///
/// assert_eq!(tw_serial::serialize(&12_u8), "12");
/// assert_eq!(tw_serial::serialize("plain"), "plain");
/// assert_eq!(tw_serial::serialize(&vec![1, 2, 3]), "[1,2,3]");
///
/// let map = BTreeMap::from([("a".to_string(), 1)]);
/// assert_eq!(tw_serial::serialize(&map), r#"[{"key":"a","value":1}]"#);
/// ```
#[inline]
pub fn serialize<T: Serial + ?Sized>(value: &T) -> String {
    value.serialize()
}

/// Rebuilds a `T` from text.
///
/// Only primitive and user-defined targets are accepted; any other category
/// is rejected with [`Error::UnsupportedCategory`] before the text is looked
/// at. Errors from a user-defined `decode` come back unchanged.
///
/// ```
/// use tw_serial::{Category, Error};
///
/// assert_eq!(tw_serial::deserialize::<i32>("-40").unwrap(), -40);
/// assert!(tw_serial::deserialize::<bool>("FALSE").is_ok_and(|b| !b));
///
/// let err = tw_serial::deserialize::<Vec<i32>>("[1]").unwrap_err();
/// assert!(matches!(err, Error::UnsupportedCategory(Category::Sequence)));
/// ```
pub fn deserialize<T: Serial>(text: &str) -> Result<T, Error> {
    let category = T::CATEGORY;
    if !category.is_decodable() {
        log::debug!("rejected deserialize into a {category} type");
        return Err(Error::UnsupportedCategory(category));
    }

    log::trace!("deserializing {category} from {} bytes", text.len());
    T::deserialize(text)
}

#[cfg(test)]
mod tests {
    use super::{deserialize, serialize};
    use crate::{Category, Error, ErrorKind, Serial, UserDefined};
    use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::fmt::Debug;

    fn round_trip<T: Serial + PartialEq + Debug>(values: &[T]) {
        for value in values {
            assert_eq!(&deserialize::<T>(&serialize(value)).unwrap(), value);
        }
    }

    #[test]
    fn primitive_round_trip() {
        round_trip(&[i8::MIN, 0, i8::MAX]);
        round_trip(&[i16::MIN, i16::MAX]);
        round_trip(&[i32::MIN, -1, i32::MAX]);
        round_trip(&[i64::MIN, i64::MAX]);
        round_trip(&[0_u8, u8::MAX]);
        round_trip(&[u16::MAX]);
        round_trip(&[u32::MAX]);
        round_trip(&[u64::MAX, 0]);
        round_trip(&[true, false]);
        round_trip(&['a', '\n', '\0']);
        round_trip(&[1.25_f32, -0.0, f32::EPSILON]);
        round_trip(&[0.1_f64, -1e-9, 123_456.789]);
        round_trip(&[String::new(), "with \"quotes\" and \\".to_string()]);
    }

    #[test]
    fn bool_accepts_exactly_four_tokens() {
        for (text, expected) in [("true", true), ("TrUe", true), ("1", true)] {
            assert_eq!(deserialize::<bool>(text).unwrap(), expected);
        }
        for (text, expected) in [("false", false), ("FALSE", false), ("0", false)] {
            assert_eq!(deserialize::<bool>(text).unwrap(), expected);
        }
        for text in ["", "on", "off", "yes", "-1", "10", "truth"] {
            let err = deserialize::<bool>(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{text}");
        }
    }

    #[test]
    fn malformed_numbers_fail() {
        assert_eq!(
            deserialize::<i64>("12abc").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            deserialize::<f32>("").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            deserialize::<u8>("-3").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn sequences() {
        assert_eq!(serialize(&Vec::<i32>::new()), "[]");
        assert_eq!(serialize(&Vec::<String>::new()), "[]");
        assert_eq!(serialize(&BTreeSet::<u8>::new()), "[]");
        assert_eq!(serialize(&vec![1, 2, 3]), "[1,2,3]");
        assert_eq!(serialize(&VecDeque::from(["x".to_string()])), r#"["x"]"#);
    }

    #[test]
    fn nested_sequences() {
        assert_eq!(serialize(&vec![vec![1, 2], vec![3]]), "[[1,2],[3]]");
        assert_eq!(serialize(&vec![Vec::<u8>::new()]), "[[]]");
    }

    #[test]
    fn single_entry_map() {
        let map = BTreeMap::from([("a".to_string(), 1)]);
        assert_eq!(serialize(&map), r#"[{"key":"a","value":1}]"#);
        assert_eq!(serialize(&BTreeMap::<u8, u8>::new()), "[]");
    }

    #[test]
    fn optional_ambiguity_is_preserved() {
        assert_eq!(serialize(&None::<u32>), "");
        assert_eq!(serialize(&None::<String>), "");
        assert_eq!(serialize(&Some(String::new())), "");
    }

    #[test]
    fn containers_and_optionals_are_rejected() {
        let cases = [
            (deserialize::<Vec<i32>>("[1,2]").unwrap_err(), Category::Sequence),
            (deserialize::<[u8; 2]>("[1,2]").unwrap_err(), Category::Sequence),
            (deserialize::<BTreeMap<String, i32>>("[]").unwrap_err(), Category::Map),
            (deserialize::<Option<i32>>("1").unwrap_err(), Category::Optional),
        ];
        for (err, category) in cases {
            assert_eq!(err.kind(), ErrorKind::UnsupportedCategory);
            assert!(matches!(err, Error::UnsupportedCategory(c) if c == category));
        }
    }

    #[derive(Debug, PartialEq)]
    struct Rejected;

    impl core::fmt::Display for Rejected {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("rejected by the type itself")
        }
    }

    impl core::error::Error for Rejected {}

    #[derive(Debug, PartialEq)]
    struct Version {
        major: u16,
        minor: u16,
    }

    impl UserDefined for Version {
        fn encode(&self) -> String {
            alloc::format!("{}.{}", self.major, self.minor)
        }

        fn decode(text: &str) -> Result<Self, Error> {
            let (major, minor) = text
                .split_once('.')
                .ok_or_else(|| Error::custom(Rejected))?;
            Ok(Self {
                major: deserialize(major)?,
                minor: deserialize(minor)?,
            })
        }
    }

    impl Serial for Version {
        const CATEGORY: Category = Category::UserDefined;

        fn serialize(&self) -> String {
            crate::codec::user_defined::encode(self)
        }

        fn deserialize(text: &str) -> Result<Self, Error> {
            crate::codec::user_defined::decode(text)
        }
    }

    #[test]
    fn user_defined_dispatch() {
        let version = Version { major: 1, minor: 20 };
        assert_eq!(serialize(&version), "1.20");
        assert_eq!(deserialize::<Version>("1.20").unwrap(), version);

        // "1.20" reads as a JSON number, so it is spliced unquoted.
        assert_eq!(serialize(&vec![version]), "[1.20]");

        let release = Version { major: 1, minor: 20 };
        let tagged = BTreeMap::from([(0_u8, release)]);
        assert_eq!(serialize(&tagged), r#"[{"key":0,"value":1.20}]"#);
    }

    #[derive(Debug, PartialEq)]
    struct Label(String);

    impl UserDefined for Label {
        fn encode(&self) -> String {
            alloc::format!("<{}>", self.0)
        }

        fn decode(text: &str) -> Result<Self, Error> {
            text.strip_prefix('<')
                .and_then(|rest| rest.strip_suffix('>'))
                .map(|inner| Self(inner.to_string()))
                .ok_or_else(|| Error::custom(Rejected))
        }
    }

    impl Serial for Label {
        const CATEGORY: Category = Category::UserDefined;

        fn serialize(&self) -> String {
            crate::codec::user_defined::encode(self)
        }

        fn deserialize(text: &str) -> Result<Self, Error> {
            crate::codec::user_defined::decode(text)
        }
    }

    #[test]
    fn user_defined_text_is_quoted_in_containers() {
        let labels = vec![Label("a\"b".to_string()), Label(String::new())];
        assert_eq!(serialize(&labels), r#"["<a\"b>","<>"]"#);
        assert!(serde_json::from_str::<serde_json::Value>(&serialize(&labels)).is_ok());
        assert_eq!(deserialize::<Label>("<x>").unwrap(), Label("x".to_string()));
    }

    #[test]
    fn user_defined_errors_pass_through() {
        let err = deserialize::<Version>("120").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Custom);
        assert_eq!(err.downcast_custom::<Rejected>(), Some(&Rejected));
        assert_eq!(err.to_string(), "rejected by the type itself");

        let err = deserialize::<Version>("1.x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn wire_output_is_json() {
        let value = vec![
            BTreeMap::from([("k\n".to_string(), vec![Some(1.5), None])]),
            BTreeMap::new(),
        ];
        let text = serialize(&value);
        assert_eq!(text, r#"[[{"key":"k\n","value":[1.5,""]}],[]]"#);
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
    }
}
