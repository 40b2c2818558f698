//! Output of the alignment engine.

use chrono::NaiveDate;

use super::{Operand, TimeSeries};
use crate::contract::BinaryOperator;
use crate::error::{AlgebraError, Result};

/// Two value vectors sharing one index, ready for elementwise combination.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair<K = NaiveDate> {
    index: Vec<K>,
    left: Vec<f64>,
    right: Vec<f64>,
}

impl<K> AlignedPair<K> {
    /// Assemble a pair; all three vectors must have the same length.
    pub fn new(index: Vec<K>, left: Vec<f64>, right: Vec<f64>) -> Result<Self> {
        if left.len() != index.len() {
            return Err(AlgebraError::LengthMismatch {
                index: index.len(),
                values: left.len(),
            });
        }
        if right.len() != index.len() {
            return Err(AlgebraError::LengthMismatch {
                index: index.len(),
                values: right.len(),
            });
        }
        Ok(Self { index, left, right })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &[K] {
        &self.index
    }

    pub fn left_values(&self) -> &[f64] {
        &self.left
    }

    pub fn right_values(&self) -> &[f64] {
        &self.right
    }

    /// Apply `op` pointwise, producing a series over the shared index.
    pub fn combine<O: BinaryOperator>(self, op: &O) -> TimeSeries<K> {
        let values = self
            .left
            .iter()
            .zip(self.right.iter())
            .map(|(&l, &r)| op.apply(l, r))
            .collect();
        TimeSeries::from_parts_unchecked(self.index, values)
    }
}

impl<K: Clone> AlignedPair<K> {
    /// Split into the two aligned series.
    pub fn into_series(self) -> (TimeSeries<K>, TimeSeries<K>) {
        let left = TimeSeries::from_parts_unchecked(self.index.clone(), self.left);
        let right = TimeSeries::from_parts_unchecked(self.index, self.right);
        (left, right)
    }
}

/// Aligned operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Aligned<K = NaiveDate> {
    /// Both inputs were scalars; there is no index.
    Scalars(f64, f64),
    /// At least one input was a series.
    Series(AlignedPair<K>),
}

impl<K> Aligned<K> {
    /// Apply `op`, yielding a scalar for two scalars and a series otherwise.
    pub fn combine<O: BinaryOperator>(self, op: &O) -> Operand<K> {
        match self {
            Aligned::Scalars(x, y) => Operand::Scalar(op.apply(x, y)),
            Aligned::Series(pair) => Operand::Series(pair.combine(op)),
        }
    }

    pub fn as_pair(&self) -> Option<&AlignedPair<K>> {
        match self {
            Aligned::Scalars(..) => None,
            Aligned::Series(pair) => Some(pair),
        }
    }
}
