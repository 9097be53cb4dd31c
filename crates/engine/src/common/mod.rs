//! Common types used throughout the replacement simulator.
//!
//! This module provides the building blocks shared by every policy. It includes:
//! 1. **Symbols:** The trait bound any accessed item must satisfy.
//! 2. **Error Handling:** The configuration error returned at engine construction.

/// Configuration error definitions.
pub mod error;

/// Symbol trait definition.
pub mod symbol;

pub use error::ConfigError;
pub use symbol::Symbol;
