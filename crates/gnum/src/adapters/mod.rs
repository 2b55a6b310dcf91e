//! Operation sets built on top of another operation set.
//!
//! - `NullableOps<K>` lifts `K` to `Option<K>`, propagating absence.
//! - `NumberOps<K>` lets `Number<K>` be used wherever `K` is.
//! - `RelabeledOps<T, U>` exposes a type as another registered type, with
//!   symbolic names for formatting and parsing.

mod nullable;
mod relabel;
mod wrapper;

pub use nullable::NullableOps;
pub use relabel::{RelabeledOps, Relabeling};
pub use wrapper::NumberOps;

/// Map a reference the base picked among inner values back to the outer
/// value it was borrowed from.
///
/// `pairs` holds `(inner, outer)` for each candidate. Base implementations
/// can only return one of their arguments, so the fallback is only reached
/// by an implementation that returns some unrelated `'static` value.
pub(crate) fn outer_of<'a, I, O>(chosen: &I, fallback: &'a O, pairs: &[(&I, &'a O)]) -> &'a O {
    pairs
        .iter()
        .find(|(inner, _)| std::ptr::eq(*inner, chosen))
        .map_or(fallback, |(_, outer)| *outer)
}
