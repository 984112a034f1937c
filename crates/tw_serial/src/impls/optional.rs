use alloc::string::String;

use crate::codec::optional;
use crate::{Category, Optional, Serial};

impl<T: Serial> Optional for Option<T> {
    type Inner = T;

    #[inline]
    fn get(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<T: Serial> Serial for Option<T> {
    const CATEGORY: Category = Category::Optional;

    #[inline]
    fn serialize(&self) -> String {
        optional::encode(self)
    }

    #[inline]
    fn place_into(&self, out: &mut String) {
        optional::place_into(self, out);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Category, Error, Serial};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn absent_is_empty_text() {
        assert_eq!(None::<i32>.serialize(), "");
        assert_eq!(None::<String>.serialize(), "");
        assert_eq!(None::<Vec<u8>>.serialize(), "");
    }

    #[test]
    fn present_is_inner_text() {
        assert_eq!(Some(42_u32).serialize(), "42");
        assert_eq!(Some(String::from("hi")).serialize(), "hi");
        assert_eq!(Some(vec![1, 2]).serialize(), "[1,2]");
        assert_eq!(Some(Some(false)).serialize(), "false");
    }

    // Absent and present-empty share one encoding. This is the documented
    // behavior of the wire format, not something to fix here.
    #[test]
    fn absent_and_empty_string_collide() {
        assert_eq!(None::<String>.serialize(), Some(String::new()).serialize());
    }

    #[test]
    fn not_decodable() {
        assert_eq!(<Option<u8> as Serial>::CATEGORY, Category::Optional);
        let err = <Option<u8> as Serial>::deserialize("1").unwrap_err();
        assert!(matches!(err, Error::UnsupportedCategory(Category::Optional)));
    }
}
