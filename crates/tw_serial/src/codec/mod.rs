//! Per-category encoders and decoders.
//!
//! [`Serial`](crate::Serial) impls route into these functions; they are
//! public so hand-written impls and generated code can reuse them.
//!
//! - [`primitive`]: scalar text, both directions.
//! - [`optional`]: absent values become empty text.
//! - [`container`]: JSON arrays for sequences, pair-arrays for maps.
//! - [`user_defined`]: calls into the type's own [`UserDefined`](crate::UserDefined) impl.

// -----------------------------------------------------------------------------
// Modules

pub mod container;
pub mod optional;
pub mod primitive;
pub mod user_defined;
