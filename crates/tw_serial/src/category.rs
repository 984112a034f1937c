use core::fmt;

use crate::Serial;

// -----------------------------------------------------------------------------
// Category

/// The shape class a type is bound to for serialization.
///
/// Every [`Serial`] type names exactly one category through
/// [`Serial::CATEGORY`], so the choice is made once, at compile time,
/// and never per value.
///
/// | category        | wire form                            | decodable |
/// |-----------------|--------------------------------------|-----------|
/// | [`Primitive`]   | canonical scalar text                | yes       |
/// | [`Optional`]    | inner text, or empty text when absent| no        |
/// | [`Sequence`]    | `[e0,e1,...]`                        | no        |
/// | [`Map`]         | `[{"key":k,"value":v},...]`          | no        |
/// | [`UserDefined`] | whatever the type's `encode` returns | yes       |
///
/// When a type could fit several shapes, the structural impls claim it first
/// (optional, then sequence, then map, then primitive). A type becomes
/// `UserDefined` only by opting in, typically with `#[derive(Serial)]`.
///
/// [`Primitive`]: Category::Primitive
/// [`Optional`]: Category::Optional
/// [`Sequence`]: Category::Sequence
/// [`Map`]: Category::Map
/// [`UserDefined`]: Category::UserDefined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Primitive,
    Optional,
    Sequence,
    Map,
    UserDefined,
}

impl Category {
    /// The category of `T`.
    ///
    /// ```
    /// use tw_serial::Category;
    /// use std::collections::BTreeMap;
    ///
    /// assert_eq!(Category::of::<u8>(), Category::Primitive);
    /// assert_eq!(Category::of::<Option<u8>>(), Category::Optional);
    /// assert_eq!(Category::of::<[u8]>(), Category::Sequence);
    /// assert_eq!(Category::of::<BTreeMap<u8, u8>>(), Category::Map);
    /// ```
    #[inline(always)]
    pub const fn of<T: Serial + ?Sized>() -> Self {
        T::CATEGORY
    }

    /// Whether values of this category can be rebuilt from text.
    ///
    /// Only [`Primitive`](Category::Primitive) and
    /// [`UserDefined`](Category::UserDefined) targets are decodable;
    /// containers and optionals are encode-only.
    #[inline]
    pub const fn is_decodable(self) -> bool {
        matches!(self, Self::Primitive | Self::UserDefined)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => f.pad("Primitive"),
            Self::Optional => f.pad("Optional"),
            Self::Sequence => f.pad("Sequence"),
            Self::Map => f.pad("Map"),
            Self::UserDefined => f.pad("UserDefined"),
        }
    }
}
