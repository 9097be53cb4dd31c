//! Symbol abstraction.
//!
//! A symbol is an atomic token in the reference string (a page id, a block
//! address, a single character). It carries no structure beyond equality and
//! hashing; the engine never inspects it.

use std::fmt::Debug;
use std::hash::Hash;

/// Any value that can appear in a reference string.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type, so `char`,
/// integers and `String` all work out of the box.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T> Symbol for T where T: Clone + Eq + Hash + Debug {}
