//! Data models for timeseries algebra.

mod aligned;
mod interpolate;
mod operand;
mod series;

pub use aligned::{Aligned, AlignedPair};
pub use interpolate::Interpolate;
pub use operand::Operand;
pub use series::TimeSeries;
