//! # Unit Components
//!
//! This module mirrors the layout of the library: one submodule per source
//! module, each exercising that module through its public API.

/// Unit tests for shared error types.
pub mod common;
