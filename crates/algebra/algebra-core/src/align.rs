//! Alignment engine.
//!
//! Reconciles two operands onto a shared, strictly ascending index before a
//! binary operator is applied.
//!
//! # Algorithm
//!
//! Both indices are walked once with two cursors, so aligning series of
//! lengths `n` and `m` costs `O(n + m)`:
//!
//! 1. A timestamp present on both sides takes each side's own value.
//! 2. Under `Intersect`, a timestamp present on one side only is dropped.
//! 3. Under the union methods, the absent side is filled with `NaN` (`Nan`),
//!    `0.0` (`Zero`) or its last observation so far (`Step`). `Step` yields
//!    `NaN` before the side's first observation.
//!
//! A scalar operand has no index: it is broadcast over the other side's
//! index without interpolation.

use std::cmp::Ordering;

use algebra_api::AlignConfig;
use algebra_spi::{
    Aligned, AlignedPair, BinaryOperator, Interpolate, Operand, Result, TimeSeries, Timestamp,
};
use tracing::{debug, trace, warn};

/// Aligns operands with a fixed [`Interpolate`] method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aligner {
    method: Interpolate,
}

impl Aligner {
    pub fn new(method: Interpolate) -> Self {
        Self { method }
    }

    pub fn from_config(config: AlignConfig) -> Self {
        Self {
            method: config.method,
        }
    }

    pub fn method(&self) -> Interpolate {
        self.method
    }

    /// Align two operands.
    ///
    /// Returns [`Aligned::Scalars`] when both are scalars, otherwise a pair of
    /// equal-length value vectors over one index.
    ///
    /// # Errors
    ///
    /// [`algebra_spi::AlgebraError::NotAscending`] if a series operand is not
    /// strictly ascending by timestamp.
    pub fn align<K: Timestamp>(
        &self,
        x: impl Into<Operand<K>>,
        y: impl Into<Operand<K>>,
    ) -> Result<Aligned<K>> {
        match (x.into(), y.into()) {
            (Operand::Scalar(x), Operand::Scalar(y)) => Ok(Aligned::Scalars(x, y)),
            (Operand::Series(x), Operand::Scalar(y)) => {
                ensure_ascending(&x, "x")?;
                let (index, left) = x.into_parts();
                let right = vec![y; index.len()];
                AlignedPair::new(index, left, right).map(Aligned::Series)
            }
            (Operand::Scalar(x), Operand::Series(y)) => {
                ensure_ascending(&y, "y")?;
                let (index, right) = y.into_parts();
                let left = vec![x; index.len()];
                AlignedPair::new(index, left, right).map(Aligned::Series)
            }
            (Operand::Series(x), Operand::Series(y)) => {
                self.align_series(&x, &y).map(Aligned::Series)
            }
        }
    }

    /// Align two series.
    pub fn align_series<K: Timestamp>(
        &self,
        x: &TimeSeries<K>,
        y: &TimeSeries<K>,
    ) -> Result<AlignedPair<K>> {
        ensure_ascending(x, "x")?;
        ensure_ascending(y, "y")?;

        let pair = match Fill::for_method(self.method) {
            None => intersect(x, y)?,
            Some(fill) => union(x, y, fill)?,
        };

        debug!(
            method = %self.method,
            x_len = x.len(),
            y_len = y.len(),
            aligned_len = pair.len(),
            "aligned series"
        );

        Ok(pair)
    }

    /// Align, then apply `op` pointwise.
    pub fn combine<K: Timestamp, O: BinaryOperator>(
        &self,
        x: impl Into<Operand<K>>,
        y: impl Into<Operand<K>>,
        op: &O,
    ) -> Result<Operand<K>> {
        trace!(operator = op.name(), method = %self.method, "combining operands");
        Ok(self.align(x, y)?.combine(op))
    }
}

/// Align two operands with `method`.
///
/// See [`Aligner::align`].
pub fn align<K: Timestamp>(
    x: impl Into<Operand<K>>,
    y: impl Into<Operand<K>>,
    method: Interpolate,
) -> Result<Aligned<K>> {
    Aligner::new(method).align(x, y)
}

fn ensure_ascending<K: Timestamp>(series: &TimeSeries<K>, side: &'static str) -> Result<()> {
    series.ensure_ascending().map_err(|err| {
        warn!(side, error = %err, "series rejected by alignment");
        err
    })
}

/// Value substituted on the side that lacks an observation.
#[derive(Debug, Clone, Copy)]
enum Fill {
    Missing,
    Zero,
    Carry,
}

impl Fill {
    fn for_method(method: Interpolate) -> Option<Self> {
        match method {
            Interpolate::Intersect => None,
            Interpolate::Nan => Some(Fill::Missing),
            Interpolate::Zero => Some(Fill::Zero),
            Interpolate::Step => Some(Fill::Carry),
        }
    }

    fn resolve(self, last: Option<f64>) -> f64 {
        match self {
            Fill::Missing => f64::NAN,
            Fill::Zero => 0.0,
            Fill::Carry => last.unwrap_or(f64::NAN),
        }
    }
}

fn intersect<K: Timestamp>(x: &TimeSeries<K>, y: &TimeSeries<K>) -> Result<AlignedPair<K>> {
    let (xi, xv) = (x.index(), x.values());
    let (yi, yv) = (y.index(), y.values());

    let capacity = xi.len().min(yi.len());
    let mut index = Vec::with_capacity(capacity);
    let mut left = Vec::with_capacity(capacity);
    let mut right = Vec::with_capacity(capacity);

    let (mut i, mut j) = (0, 0);
    while i < xi.len() && j < yi.len() {
        match xi[i].cmp(&yi[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                index.push(xi[i]);
                left.push(xv[i]);
                right.push(yv[j]);
                i += 1;
                j += 1;
            }
        }
    }

    AlignedPair::new(index, left, right)
}

fn union<K: Timestamp>(x: &TimeSeries<K>, y: &TimeSeries<K>, fill: Fill) -> Result<AlignedPair<K>> {
    let (xi, xv) = (x.index(), x.values());
    let (yi, yv) = (y.index(), y.values());

    let capacity = xi.len() + yi.len();
    let mut index = Vec::with_capacity(capacity);
    let mut left = Vec::with_capacity(capacity);
    let mut right = Vec::with_capacity(capacity);

    let mut last_x: Option<f64> = None;
    let mut last_y: Option<f64> = None;
    let (mut i, mut j) = (0, 0);

    loop {
        let next = match (xi.get(i), yi.get(j)) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };

        match next {
            Ordering::Less => {
                index.push(xi[i]);
                left.push(xv[i]);
                right.push(fill.resolve(last_y));
                last_x = Some(xv[i]);
                i += 1;
            }
            Ordering::Greater => {
                index.push(yi[j]);
                left.push(fill.resolve(last_x));
                right.push(yv[j]);
                last_y = Some(yv[j]);
                j += 1;
            }
            Ordering::Equal => {
                index.push(xi[i]);
                left.push(xv[i]);
                right.push(yv[j]);
                last_x = Some(xv[i]);
                last_y = Some(yv[j]);
                i += 1;
                j += 1;
            }
        }
    }

    AlignedPair::new(index, left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra_spi::AlgebraError;

    fn series(index: &[i64], values: &[f64]) -> TimeSeries<i64> {
        TimeSeries::new(index.to_vec(), values.to_vec()).unwrap()
    }

    fn pair(x: &TimeSeries<i64>, y: &TimeSeries<i64>, method: Interpolate) -> AlignedPair<i64> {
        Aligner::new(method).align_series(x, y).unwrap()
    }

    #[test]
    fn test_default_method_is_step() {
        assert_eq!(Aligner::default().method(), Interpolate::Step);
        assert_eq!(
            Aligner::from_config(AlignConfig::intersect()).method(),
            Interpolate::Intersect
        );
    }

    #[test]
    fn test_intersect() {
        let x = series(&[1, 2, 3, 5], &[1.0, 2.0, 3.0, 5.0]);
        let y = series(&[2, 3, 4], &[20.0, 30.0, 40.0]);
        let p = pair(&x, &y, Interpolate::Intersect);

        assert_eq!(p.index(), &[2, 3]);
        assert_eq!(p.left_values(), &[2.0, 3.0]);
        assert_eq!(p.right_values(), &[20.0, 30.0]);
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let x = series(&[1, 3], &[1.0, 3.0]);
        let y = series(&[2, 4], &[2.0, 4.0]);
        let p = pair(&x, &y, Interpolate::Intersect);
        assert!(p.is_empty());
        assert!(p.left_values().is_empty());
        assert!(p.right_values().is_empty());
    }

    #[test]
    fn test_nan_fills_missing() {
        let x = series(&[1, 3], &[1.0, 3.0]);
        let y = series(&[2, 3], &[20.0, 30.0]);
        let p = pair(&x, &y, Interpolate::Nan);

        assert_eq!(p.index(), &[1, 2, 3]);
        assert_eq!(p.left_values()[0], 1.0);
        assert!(p.left_values()[1].is_nan());
        assert_eq!(p.left_values()[2], 3.0);
        assert!(p.right_values()[0].is_nan());
        assert_eq!(p.right_values()[1], 20.0);
        assert_eq!(p.right_values()[2], 30.0);
    }

    #[test]
    fn test_zero_fills_zero() {
        let x = series(&[1, 3], &[1.0, 3.0]);
        let y = series(&[2, 3], &[20.0, 30.0]);
        let p = pair(&x, &y, Interpolate::Zero);

        assert_eq!(p.index(), &[1, 2, 3]);
        assert_eq!(p.left_values(), &[1.0, 0.0, 3.0]);
        assert_eq!(p.right_values(), &[0.0, 20.0, 30.0]);
    }

    #[test]
    fn test_step_carries_forward() {
        let x = series(&[1, 4], &[1.0, 4.0]);
        let y = series(&[2, 3, 5], &[20.0, 30.0, 50.0]);
        let p = pair(&x, &y, Interpolate::Step);

        assert_eq!(p.index(), &[1, 2, 3, 4, 5]);
        assert_eq!(p.left_values(), &[1.0, 1.0, 1.0, 4.0, 4.0]);
        assert!(p.right_values()[0].is_nan());
        assert_eq!(&p.right_values()[1..], &[20.0, 30.0, 30.0, 50.0]);
    }

    #[test]
    fn test_step_does_not_backfill() {
        let x = series(&[3], &[3.0]);
        let y = series(&[1, 2, 3], &[1.0, 2.0, 3.0]);
        let p = pair(&x, &y, Interpolate::Step);

        assert!(p.left_values()[0].is_nan());
        assert!(p.left_values()[1].is_nan());
        assert_eq!(p.left_values()[2], 3.0);
    }

    #[test]
    fn test_step_carries_missing_observation() {
        let x = series(&[1, 3], &[f64::NAN, 3.0]);
        let y = series(&[2], &[2.0]);
        let p = pair(&x, &y, Interpolate::Step);

        assert!(p.left_values()[1].is_nan());
    }

    #[test]
    fn test_empty_side() {
        let x = series(&[], &[]);
        let y = series(&[1, 2], &[1.0, 2.0]);

        assert!(pair(&x, &y, Interpolate::Intersect).is_empty());

        let p = pair(&x, &y, Interpolate::Zero);
        assert_eq!(p.index(), &[1, 2]);
        assert_eq!(p.left_values(), &[0.0, 0.0]);

        let p = pair(&x, &y, Interpolate::Step);
        assert!(p.left_values().iter().all(|v| v.is_nan()));

        let p = pair(&y, &x, Interpolate::Nan);
        assert_eq!(p.left_values(), &[1.0, 2.0]);
        assert!(p.right_values().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_identical_indices() {
        let x = series(&[1, 2, 3], &[1.0, 2.0, 3.0]);
        let y = series(&[1, 2, 3], &[4.0, 5.0, 6.0]);
        for method in Interpolate::ALL {
            let p = pair(&x, &y, method);
            assert_eq!(p.index(), &[1, 2, 3]);
            assert_eq!(p.left_values(), x.values());
            assert_eq!(p.right_values(), y.values());
        }
    }

    #[test]
    fn test_scalar_broadcast() {
        let x = series(&[1, 2], &[1.0, 2.0]);

        let aligned = align(x.clone(), 5.0, Interpolate::Intersect).unwrap();
        let p = aligned.as_pair().unwrap();
        assert_eq!(p.index(), &[1, 2]);
        assert_eq!(p.right_values(), &[5.0, 5.0]);

        let aligned = align(5.0, x, Interpolate::Step).unwrap();
        let p = aligned.as_pair().unwrap();
        assert_eq!(p.left_values(), &[5.0, 5.0]);
        assert_eq!(p.right_values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_scalar_with_empty_series() {
        for method in Interpolate::ALL {
            let aligned = align(series(&[], &[]), 1.0, method).unwrap();
            assert!(aligned.as_pair().unwrap().is_empty());

            let sum = Aligner::new(method)
                .combine(1.0, series(&[], &[]), &crate::Arithmetic::Add)
                .unwrap();
            assert_eq!(sum, Operand::Series(TimeSeries::empty()));
        }
    }

    #[test]
    fn test_two_scalars_unchanged() {
        let aligned: Aligned<i64> = align(1.5, 2.5, Interpolate::Step).unwrap();
        assert_eq!(aligned, Aligned::Scalars(1.5, 2.5));
    }

    #[test]
    fn test_unsorted_series_rejected() {
        let unsorted = series(&[2, 1], &[1.0, 2.0]);
        let sorted = series(&[1, 2], &[1.0, 2.0]);

        let err = Aligner::default().align_series(&sorted, &unsorted).unwrap_err();
        assert_eq!(err, AlgebraError::NotAscending { position: 1 });

        let err = align(unsorted, 1.0, Interpolate::Zero).unwrap_err();
        assert_eq!(err, AlgebraError::NotAscending { position: 1 });
    }

    #[test]
    fn test_duplicate_timestamps_rejected() {
        let dup = series(&[1, 1], &[1.0, 2.0]);
        let result = align(2.0, dup, Interpolate::Step);
        assert!(matches!(result, Err(AlgebraError::NotAscending { .. })));
    }
}
