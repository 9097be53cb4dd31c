//! Replacement policy tests.
//!
//! Each policy is driven through the engine on short reference strings whose
//! outcomes, slots and frames are worked out by hand.

pub mod frequency;
