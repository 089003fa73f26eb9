//! Tests for shared types.

/// Error display and conversion tests.
pub mod error;
