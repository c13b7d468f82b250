//! Common types used across this crate, with meaning not defined within a
//! specific module.

use std::collections::BTreeSet;

/// An ordered list of code points: a decomposition or case mapping, a named
/// sequence, or a variation sequence.
pub type CodePointSequence = Vec<u32>;

/// A set of code point values, in ascending order.
pub type CodePointSet = BTreeSet<u32>;

/// An inclusive `(first, last)` pair of code points.
pub type CodePointRange = (u32, u32);
