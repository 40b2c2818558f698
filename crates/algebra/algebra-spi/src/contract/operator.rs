//! Operator trait definitions.

use crate::error::Result;
use crate::model::{Operand, TimeSeries};

/// Key type usable as a series index.
///
/// Implemented for every ordered, copyable, thread-safe type, which covers
/// `chrono::NaiveDate`, `chrono::NaiveDateTime` and integer unix timestamps.
pub trait Timestamp: Ord + Copy + Send + Sync {}

impl<T: Ord + Copy + Send + Sync> Timestamp for T {}

/// Pointwise binary arithmetic applied after alignment.
pub trait BinaryOperator: Send + Sync {
    /// Operator name.
    fn name(&self) -> &str;

    /// Combine one aligned pair of values.
    fn apply(&self, x: f64, y: f64) -> f64;
}

/// Elementwise mapping over a single series.
///
/// Implementations provide the per-value mapping; the index is never touched.
pub trait ElementwiseTransform: Send + Sync {
    /// Transform name.
    fn name(&self) -> &str;

    /// Map one value.
    fn apply_value(&self, value: f64) -> f64;

    /// Whether the input must be strictly ascending by timestamp.
    fn requires_ascending(&self) -> bool {
        false
    }

    /// Map every value of `series`.
    fn transform<K: Timestamp>(&self, series: &TimeSeries<K>) -> Result<TimeSeries<K>>
    where
        Self: Sized,
    {
        if self.requires_ascending() {
            series.ensure_ascending()?;
        }
        Ok(series.map_values(|v| self.apply_value(v)))
    }

    /// Map a scalar or every value of a series, preserving the shape.
    fn transform_operand<K: Timestamp>(&self, operand: Operand<K>) -> Result<Operand<K>>
    where
        Self: Sized,
    {
        match operand {
            Operand::Scalar(v) => Ok(Operand::Scalar(self.apply_value(v))),
            Operand::Series(series) => self.transform(&series).map(Operand::Series),
        }
    }
}
