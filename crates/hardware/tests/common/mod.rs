//! Shared test infrastructure.

/// Instruction encoders.
pub mod builder;

/// Simulator test context.
pub mod harness;

pub use builder::instruction::InstructionBuilder;
pub use harness::TestContext;
