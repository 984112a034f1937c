use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;

use crate::{Category, Error, Serial};

// Owning pointers are transparent: same category, same text.
macro_rules! impl_pointer_serial {
    ($($ptr:ident),+ $(,)?) => {$(
        impl<T: Serial> Serial for $ptr<T> {
            const CATEGORY: Category = T::CATEGORY;

            #[inline]
            fn serialize(&self) -> String {
                T::serialize(self)
            }

            #[inline]
            fn deserialize(text: &str) -> Result<Self, Error> {
                T::deserialize(text).map($ptr::new)
            }

            #[inline]
            fn place_into(&self, out: &mut String) {
                T::place_into(self, out);
            }
        }
    )+};
}

impl_pointer_serial!(Box, Rc, Arc);

/// A borrow encodes like its pointee but can never be decoded into.
///
/// It reports the pointee's category, so `deserialize::<&T>` gets past the
/// engine's category check and fails in the default
/// [`Serial::deserialize`] instead. The error is still
/// [`Error::UnsupportedCategory`], carrying the pointee's category: the
/// category is decodable, the borrowed target is not.
impl<T: Serial + ?Sized> Serial for &T {
    const CATEGORY: Category = T::CATEGORY;

    #[inline]
    fn serialize(&self) -> String {
        T::serialize(self)
    }

    #[inline]
    fn place_into(&self, out: &mut String) {
        T::place_into(self, out);
    }
}
