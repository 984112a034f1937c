use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::codec::primitive::{decode, encode, place_text_into};
use crate::{Category, Error, Serial};

macro_rules! impl_primitive_serial {
    ($($ty:ty),+ $(,)?) => {$(
        impl Serial for $ty {
            const CATEGORY: Category = Category::Primitive;

            #[inline]
            fn serialize(&self) -> String {
                encode(self)
            }

            #[inline]
            fn deserialize(text: &str) -> Result<Self, Error> {
                decode(text)
            }
        }
    )+};
}

impl_primitive_serial!(i8, i16, i32, i64, isize);
impl_primitive_serial!(u8, u16, u32, u64, usize);
impl_primitive_serial!(f32, f64, bool);

// Text-valued primitives: their encoding says nothing about their type,
// so they are always quoted inside a structure.

impl Serial for char {
    const CATEGORY: Category = Category::Primitive;

    #[inline]
    fn serialize(&self) -> String {
        encode(self)
    }

    #[inline]
    fn deserialize(text: &str) -> Result<Self, Error> {
        decode(text)
    }

    fn place_into(&self, out: &mut String) {
        let mut buf = [0_u8; 4];
        place_text_into(self.encode_utf8(&mut buf), out);
    }
}

impl Serial for String {
    const CATEGORY: Category = Category::Primitive;

    #[inline]
    fn serialize(&self) -> String {
        encode(self)
    }

    #[inline]
    fn deserialize(text: &str) -> Result<Self, Error> {
        decode(text)
    }

    #[inline]
    fn place_into(&self, out: &mut String) {
        place_text_into(self, out);
    }
}

/// Encode-only: `str` is unsized and can never be a decode target.
impl Serial for str {
    const CATEGORY: Category = Category::Primitive;

    #[inline]
    fn serialize(&self) -> String {
        self.to_owned()
    }

    #[inline]
    fn place_into(&self, out: &mut String) {
        place_text_into(self, out);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Category, Error, ErrorKind, Serial};
    use alloc::string::String;

    #[test]
    fn categories() {
        assert_eq!(<i8 as Serial>::CATEGORY, Category::Primitive);
        assert_eq!(<u64 as Serial>::CATEGORY, Category::Primitive);
        assert_eq!(<bool as Serial>::CATEGORY, Category::Primitive);
        assert_eq!(<char as Serial>::CATEGORY, Category::Primitive);
        assert_eq!(<f32 as Serial>::CATEGORY, Category::Primitive);
        assert_eq!(<String as Serial>::CATEGORY, Category::Primitive);
        assert_eq!(<str as Serial>::CATEGORY, Category::Primitive);
    }

    #[test]
    fn top_level_text_is_unquoted() {
        assert_eq!("a \"b\"".serialize(), "a \"b\"");
        assert_eq!(String::from("x\ny").serialize(), "x\ny");
        assert_eq!('"'.serialize(), "\"");
    }

    #[test]
    fn decode_errors_are_invalid_argument() {
        let err = <u8 as Serial>::deserialize("256").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
