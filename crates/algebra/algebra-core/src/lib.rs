//! Timeseries Algebra Core
//!
//! Alignment engine and the arithmetic operators built on it.

pub mod align;
pub mod binary;
pub mod unary;

pub use align::{align, Aligner};
pub use binary::{add, combine, divide, multiply, subtract, Arithmetic};
pub use unary::{abs, ceil, exp, floor, log, power, sqrt, Abs, Ceil, Exp, Floor, Log, Power, Sqrt};
