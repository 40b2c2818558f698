//! Error types for timeseries algebra.

mod algebra_error;

pub use algebra_error::{AlgebraError, Result};
