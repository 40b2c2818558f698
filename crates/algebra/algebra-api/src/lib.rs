//! Timeseries Algebra API
//!
//! Configuration types and builders for the algebra operators.

pub mod config;

pub use config::{AlgebraConfig, AlgebraConfigBuilder, AlignConfig, BoundConfig, PowerConfig};
