use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::{Category, Map, Serial};

// Shared `Serial` body of every map type.
macro_rules! impl_map_serial {
    () => {
        const CATEGORY: Category = Category::Map;

        #[inline]
        fn serialize(&self) -> String {
            crate::codec::container::encode_map(self)
        }
    };
}

impl<K: Serial, V: Serial> Map for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: Serial, V: Serial> Serial for BTreeMap<K, V> {
    impl_map_serial!();
}

#[cfg(feature = "std")]
impl<K: Serial, V: Serial, S> Map for std::collections::HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

#[cfg(feature = "std")]
impl<K: Serial, V: Serial, S> Serial for std::collections::HashMap<K, V, S> {
    impl_map_serial!();
}

#[cfg(feature = "hashbrown")]
impl<K: Serial, V: Serial, S> Map for hashbrown::HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

#[cfg(feature = "hashbrown")]
impl<K: Serial, V: Serial, S> Serial for hashbrown::HashMap<K, V, S> {
    impl_map_serial!();
}

#[cfg(test)]
mod tests {
    use crate::{Category, Error, Serial};
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};

    #[test]
    fn entries_in_map_order() {
        let map = BTreeMap::from([(3_u8, true), (1, false)]);
        assert_eq!(
            map.serialize(),
            r#"[{"key":1,"value":false},{"key":3,"value":true}]"#
        );
    }

    #[test]
    fn optional_values() {
        let map = BTreeMap::from([("a".to_string(), None), ("b".to_string(), Some(2))]);
        assert_eq!(
            map.serialize(),
            r#"[{"key":"a","value":""},{"key":"b","value":2}]"#
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn hash_map_single_entry() {
        let map: std::collections::HashMap<String, f64> =
            [("pi".to_string(), 3.5)].into_iter().collect();
        assert_eq!(map.serialize(), r#"[{"key":"pi","value":3.5}]"#);
    }

    #[test]
    fn not_decodable() {
        assert_eq!(<BTreeMap<u8, u8> as Serial>::CATEGORY, Category::Map);
        let err = <BTreeMap<u8, u8> as Serial>::deserialize("[]").unwrap_err();
        assert!(matches!(err, Error::UnsupportedCategory(Category::Map)));
    }
}
