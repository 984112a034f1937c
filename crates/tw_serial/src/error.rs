use alloc::boxed::Box;
use core::error;

use thiserror::Error;
use tw_text::ParseError;

use crate::Category;

// -----------------------------------------------------------------------------
// Error

/// Everything that can go wrong in [`deserialize`](crate::deserialize).
///
/// Encoding never fails, so this type only shows up on the decode side.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The text is not a valid value of the requested primitive type.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ParseError),

    /// The target type is an optional or a container, which cannot be decoded.
    ///
    /// A borrowed target (`&T`) also fails this way, carrying the category
    /// of `T` even when `T` itself is decodable.
    #[error("cannot deserialize into a {0} type")]
    UnsupportedCategory(Category),

    /// A failure raised by a user-defined `decode`, passed through untouched.
    #[error(transparent)]
    Custom(Box<dyn error::Error + Send + Sync>),
}

/// The coarse kind of an [`Error`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    UnsupportedCategory,
    Custom,
}

impl Error {
    /// Wraps an arbitrary error raised by a user-defined `decode`.
    ///
    /// ```
    /// use tw_serial::{Error, ErrorKind};
    ///
    /// let err = Error::custom(core::fmt::Error);
    /// assert_eq!(err.kind(), ErrorKind::Custom);
    /// assert!(err.downcast_custom::<core::fmt::Error>().is_some());
    /// ```
    #[inline]
    pub fn custom<E>(err: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        Self::Custom(Box::new(err))
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::UnsupportedCategory(_) => ErrorKind::UnsupportedCategory,
            Self::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the user-defined error if it has type `E`.
    pub fn downcast_custom<E: error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Custom(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
