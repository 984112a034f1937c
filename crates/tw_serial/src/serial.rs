use alloc::string::String;

use crate::{Category, Error, codec};

// -----------------------------------------------------------------------------
// Serial

/// A type the engine knows how to turn into wire-format text.
///
/// This trait is the type classifier: [`CATEGORY`](Serial::CATEGORY) binds
/// the type to one [`Category`], and the impl routes `serialize` to the codec
/// of that category. All routing is resolved at compile time.
///
/// # Implementations
///
/// - Primitive: integers `i8`..`i64`, `u8`..`u64`, `isize`, `usize`, `bool`,
///   `char`, `f32`, `f64`, [`String`] and `str`.
/// - Optional: `Option<T>`.
/// - Sequence: `Vec`, `VecDeque`, `LinkedList`, `BTreeSet`, `BinaryHeap`,
///   `[T; N]`, `[T]`, plus `HashSet` with the `std` feature.
/// - Map: `BTreeMap`, plus `HashMap` with the `std` feature.
/// - `&T`, `Box<T>`, `Rc<T>` and `Arc<T>` take the category of `T`.
///   A borrow can be encoded but never decoded.
/// - UserDefined: types implementing [`UserDefined`] that opt in with
///   `#[derive(Serial)]` (or `#[derive(Dto)]`).
///
/// The `hashbrown` feature adds `hashbrown::HashMap` and `hashbrown::HashSet`.
///
/// # Example
///
/// ```
/// use tw_serial::{Category, Serial};
///
/// assert_eq!(<Vec<u8> as Serial>::CATEGORY, Category::Sequence);
/// assert_eq!(vec![1_u8, 2].serialize(), "[1,2]");
/// assert_eq!(<u8 as Serial>::deserialize("2").unwrap(), 2);
/// ```
pub trait Serial {
    /// The category this type is bound to.
    const CATEGORY: Category;

    /// Encodes `self` as wire-format text.
    ///
    /// Encoding never fails and never mutates the value.
    fn serialize(&self) -> String;

    /// Rebuilds a value from text.
    ///
    /// Only primitive and user-defined types override this. The default
    /// rejects the call with [`Error::UnsupportedCategory`].
    fn deserialize(text: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let _ = text;
        Err(Error::UnsupportedCategory(Self::CATEGORY))
    }

    /// Appends `self` to `out` as one element of an enclosing array or object.
    ///
    /// The default inspects the encoded text (see
    /// [`codec::container::place_into`]). Text-valued primitives override it
    /// to always quote, because their content says nothing about their type.
    fn place_into(&self, out: &mut String) {
        codec::container::place_into(&self.serialize(), out);
    }
}

// -----------------------------------------------------------------------------
// Capabilities

/// A wrapper around zero or one inner value.
pub trait Optional {
    type Inner: Serial;

    /// The inner value, if present.
    fn get(&self) -> Option<&Self::Inner>;
}

/// A homogeneous collection, ordered or not.
///
/// Unordered collections are encoded in whatever order they iterate.
pub trait Sequence {
    type Item: Serial;

    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

/// A collection of key-value pairs. Keys need not be primitive.
pub trait Map {
    type Key: Serial;
    type Value: Serial;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

/// The capability pair a type provides to be serialized by its own rules.
///
/// The engine calls [`encode`](UserDefined::encode) and
/// [`decode`](UserDefined::decode) as-is. It neither checks their output
/// nor rewraps their errors.
///
/// A type implementing this trait joins the
/// [`UserDefined`](Category::UserDefined) category with `#[derive(Serial)]`.
///
/// # Example
///
/// ```
/// use tw_serial::{Error, UserDefined, derive::Serial};
///
/// #[derive(Serial, Debug, PartialEq)]
/// struct Celsius(i32);
///
/// impl UserDefined for Celsius {
///     fn encode(&self) -> String {
///         format!("{}C", self.0)
///     }
///
///     fn decode(text: &str) -> Result<Self, Error> {
///         let digits = text.strip_suffix('C').unwrap_or(text);
///         Ok(Celsius(tw_serial::deserialize(digits)?))
///     }
/// }
///
/// assert_eq!(tw_serial::serialize(&vec![Celsius(-3)]), r#"["-3C"]"#);
/// assert_eq!(tw_serial::deserialize::<Celsius>("21C").unwrap(), Celsius(21));
/// ```
pub trait UserDefined: Sized {
    /// Encodes `self`.
    fn encode(&self) -> String;

    /// Builds a value from text produced by [`encode`](UserDefined::encode).
    fn decode(text: &str) -> Result<Self, Error>;
}
