//! [`Serial`](crate::Serial) impls for core, alloc and std types.
//!
//! - primitive: integers, floats, `bool`, `char`, `String`, `str`
//! - optional: `Option<T>`
//! - sequence: `Vec`, `VecDeque`, `LinkedList`, `BTreeSet`, `BinaryHeap`, arrays, slices, `HashSet`
//! - map: `BTreeMap`, `HashMap`
//! - pointer: `Box`, `Rc`, `Arc`

// -----------------------------------------------------------------------------
// Modules

mod map;
mod optional;
mod pointer;
mod primitive;
mod sequence;
