#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Code generated by `tw_serial_derive` names this crate `::tw_serial`,
// which must also resolve inside the crate's own tests.
extern crate self as tw_serial;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod category;
mod engine;
mod error;
mod impls;
mod serial;

pub mod codec;
pub mod validate;

#[cfg(feature = "dto")]
pub mod dto;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use category::Category;
pub use engine::{deserialize, serialize};
pub use error::{Error, ErrorKind};
pub use serial::{Map, Optional, Sequence, Serial, UserDefined};
pub use tw_text::{ParseError, Primitive};

#[cfg(feature = "derive")]
pub use tw_serial_derive as derive;
