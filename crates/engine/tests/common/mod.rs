//! Shared helpers for engine tests.

/// Engine construction and run helpers.
pub mod harness;
