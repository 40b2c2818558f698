//! Scalar-or-series operands.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeSeries;

/// Either a bare number or a timeseries.
///
/// A scalar has no timestamps and broadcasts against every timestamp of the
/// series it is paired with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    untagged,
    bound(deserialize = "K: Deserialize<'de>")
)]
pub enum Operand<K = NaiveDate> {
    Scalar(f64),
    Series(TimeSeries<K>),
}

impl<K> Operand<K> {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Operand::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Operand::Scalar(v) => Some(*v),
            Operand::Series(_) => None,
        }
    }

    pub fn as_series(&self) -> Option<&TimeSeries<K>> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Series(s) => Some(s),
        }
    }

    pub fn into_series(self) -> Option<TimeSeries<K>> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Series(s) => Some(s),
        }
    }
}

impl<K> From<f64> for Operand<K> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<K> From<TimeSeries<K>> for Operand<K> {
    fn from(series: TimeSeries<K>) -> Self {
        Operand::Series(series)
    }
}

impl<K: Clone> From<&TimeSeries<K>> for Operand<K> {
    fn from(series: &TimeSeries<K>) -> Self {
        Operand::Series(series.clone())
    }
}
