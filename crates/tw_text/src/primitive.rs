use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};

use crate::ParseError;

// -----------------------------------------------------------------------------
// Primitive

/// A scalar with a canonical text form and a parse rule back.
///
/// Implemented for the fixed-width integers (`i8`..`i64`, `u8`..`u64`,
/// `isize`, `usize`), `bool`, `char`, `f32`, `f64` and [`String`].
///
/// # Encoding
///
/// - `bool` renders as the token `true` or `false`.
/// - [`String`] is returned unchanged, with no quoting and no escaping.
/// - Numbers use their [`Display`](core::fmt::Display) rendering.
/// - `char` renders as the character itself, not its code point.
///
/// # Decoding
///
/// - `bool` accepts `true`/`1` and `false`/`0`, ignoring ASCII case.
/// - Integers parse as `i64` or `u64` (by signedness) and are then narrowed;
///   values that do not fit fail with [`ParseError::OutOfRange`].
/// - Floats parse as `f64` and are narrowed to the target width.
/// - `char` takes a one-character text as is, maps the empty text to `'\0'`,
///   and reads anything longer as a byte value (`"65"` is `'A'`).
/// - [`String`] always succeeds.
///
/// Surrounding ASCII whitespace is ignored for numbers.
///
/// # Examples
///
/// ```
/// use tw_text::{ParseError, Primitive};
///
/// assert_eq!(true.encode(), "true");
/// assert_eq!('x'.encode(), "x");
/// assert_eq!((-7_i8).encode(), "-7");
///
/// assert_eq!(i8::decode("-7"), Ok(-7));
/// assert!(matches!(u8::decode("300"), Err(ParseError::OutOfRange { .. })));
/// assert!(matches!(bool::decode("yes"), Err(ParseError::Bool(_))));
/// ```
pub trait Primitive: Sized {
    /// Name of the type, as used in error messages.
    const NAME: &'static str;

    /// Canonical text of `self`.
    fn encode(&self) -> String;

    /// Parses `text` into a value of this type.
    fn decode(text: &str) -> Result<Self, ParseError>;
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($wide:ty => $($ty:ty),+ $(,)?) => {$(
        impl Primitive for $ty {
            const NAME: &'static str = stringify!($ty);

            #[inline]
            fn encode(&self) -> String {
                self.to_string()
            }

            fn decode(text: &str) -> Result<Self, ParseError> {
                let trimmed = text.trim_ascii();
                let wide = trimmed
                    .parse::<$wide>()
                    .map_err(|_| ParseError::Integer(text.to_owned()))?;
                <$ty>::try_from(wide).map_err(|_| ParseError::OutOfRange {
                    value: text.to_owned(),
                    target: Self::NAME,
                })
            }
        }
    )+};
}

impl_integer!(i64 => i8, i16, i32, i64, isize);
impl_integer!(u64 => u8, u16, u32, u64, usize);

// -----------------------------------------------------------------------------
// Floats

macro_rules! impl_float {
    ($($ty:ty),+ $(,)?) => {$(
        impl Primitive for $ty {
            const NAME: &'static str = stringify!($ty);

            #[inline]
            fn encode(&self) -> String {
                self.to_string()
            }

            #[allow(clippy::cast_possible_truncation, reason = "narrowing is the contract")]
            fn decode(text: &str) -> Result<Self, ParseError> {
                text.trim_ascii()
                    .parse::<f64>()
                    .map(|wide| wide as $ty)
                    .map_err(|_| ParseError::Float(text.to_owned()))
            }
        }
    )+};
}

impl_float!(f32, f64);

// -----------------------------------------------------------------------------
// Others

impl Primitive for bool {
    const NAME: &'static str = "bool";

    #[inline]
    fn encode(&self) -> String {
        let token = if *self { "true" } else { "false" };
        token.to_owned()
    }

    fn decode(text: &str) -> Result<Self, ParseError> {
        if text == "1" || text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text == "0" || text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ParseError::Bool(text.to_owned()))
        }
    }
}

impl Primitive for char {
    const NAME: &'static str = "char";

    #[inline]
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(text: &str) -> Result<Self, ParseError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok('\0'),
            (Some(ch), None) => Ok(ch),
            _ => {
                let code = text
                    .trim_ascii()
                    .parse::<i64>()
                    .map_err(|_| ParseError::Char(text.to_owned()))?;
                u8::try_from(code)
                    .map(char::from)
                    .map_err(|_| ParseError::OutOfRange {
                        value: text.to_owned(),
                        target: Self::NAME,
                    })
            }
        }
    }
}

impl Primitive for String {
    const NAME: &'static str = "String";

    #[inline]
    fn encode(&self) -> String {
        self.clone()
    }

    #[inline]
    fn decode(text: &str) -> Result<Self, ParseError> {
        Ok(text.to_owned())
    }
}
