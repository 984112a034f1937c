use alloc::collections::{BTreeSet, BinaryHeap, LinkedList, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;

use crate::{Category, Sequence, Serial};

// Shared `Serial` body of every sequence type.
macro_rules! impl_sequence_serial {
    () => {
        const CATEGORY: Category = Category::Sequence;

        #[inline]
        fn serialize(&self) -> String {
            crate::codec::container::encode_sequence(self)
        }
    };
}

macro_rules! impl_sequence {
    ($($ty:ident),+ $(,)?) => {$(
        impl<T: Serial> Sequence for $ty<T> {
            type Item = T;

            #[inline]
            fn items(&self) -> impl Iterator<Item = &T> {
                self.iter()
            }
        }

        impl<T: Serial> Serial for $ty<T> {
            impl_sequence_serial!();
        }
    )+};
}

impl_sequence!(Vec, VecDeque, LinkedList, BTreeSet, BinaryHeap);

impl<T: Serial> Sequence for [T] {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T: Serial> Serial for [T] {
    impl_sequence_serial!();
}

impl<T: Serial, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T: Serial, const N: usize> Serial for [T; N] {
    impl_sequence_serial!();
}

#[cfg(feature = "std")]
impl<T: Serial, S> Sequence for std::collections::HashSet<T, S> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

#[cfg(feature = "std")]
impl<T: Serial, S> Serial for std::collections::HashSet<T, S> {
    impl_sequence_serial!();
}

#[cfg(feature = "hashbrown")]
impl<T: Serial, S> Sequence for hashbrown::HashSet<T, S> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

#[cfg(feature = "hashbrown")]
impl<T: Serial, S> Serial for hashbrown::HashSet<T, S> {
    impl_sequence_serial!();
}

#[cfg(test)]
mod tests {
    use crate::{Category, Error, Serial};
    use alloc::collections::{BinaryHeap, LinkedList};
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn every_sequence_is_a_sequence() {
        assert_eq!(<Vec<u8> as Serial>::CATEGORY, Category::Sequence);
        assert_eq!(<[u8; 3] as Serial>::CATEGORY, Category::Sequence);
        assert_eq!(<[String] as Serial>::CATEGORY, Category::Sequence);
        assert_eq!(<LinkedList<u8> as Serial>::CATEGORY, Category::Sequence);
        assert_eq!(<BinaryHeap<u8> as Serial>::CATEGORY, Category::Sequence);
    }

    #[test]
    fn slices_and_arrays() {
        let array = [1_u8, 2, 3];
        assert_eq!(array.serialize(), "[1,2,3]");
        assert_eq!(array[..2].serialize(), "[1,2]");
        assert_eq!(<[i32; 0]>::default().serialize(), "[]");
    }

    #[cfg(feature = "std")]
    #[test]
    fn hash_set_single_element() {
        let set: std::collections::HashSet<i64> = [7].into_iter().collect();
        assert_eq!(set.serialize(), "[7]");
    }

    #[test]
    fn not_decodable() {
        let err = <Vec<u8> as Serial>::deserialize("[1]").unwrap_err();
        assert!(matches!(err, Error::UnsupportedCategory(Category::Sequence)));
    }
}
