//! Timeseries Algebra Service Provider Interface
//!
//! Defines the series model, alignment methods, errors and operator traits
//! shared by the algebra crates.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{BinaryOperator, ElementwiseTransform, Timestamp};
pub use error::{AlgebraError, Result};
pub use model::{Aligned, AlignedPair, Interpolate, Operand, TimeSeries};

// ============================================================================
// Tests
// ============================================================================
