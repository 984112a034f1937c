#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use tw_serial as serial;
pub use tw_text as text;

pub use tw_serial::{Category, Error, Serial, deserialize, serialize};
