//! Items named by code that `tw_serial_derive` generates.
//!
//! The user crate may be `no_std` without `extern crate alloc`,
//! so everything goes through this module.

pub use alloc::string::String;
pub use alloc::vec::Vec;
pub use core::option::Option;
pub use core::result::Result;
