//! Date-indexed numeric series.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::contract::Timestamp;
use crate::error::{AlgebraError, Result};

/// An ordered sequence of `(timestamp, value)` observations.
///
/// Timestamps and values are stored as parallel vectors. Values are `f64`;
/// a missing observation is represented by `NaN`, which propagates through
/// arithmetic.
///
/// Construction only checks that both vectors have the same length. Ordering
/// is a precondition checked by the operations that rely on it, see
/// [`TimeSeries::ensure_ascending`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawTimeSeries<K>",
    bound(deserialize = "K: Deserialize<'de>")
)]
pub struct TimeSeries<K = NaiveDate> {
    index: Vec<K>,
    values: Vec<f64>,
}

/// Unvalidated wire form of [`TimeSeries`].
#[doc(hidden)]
#[derive(Deserialize)]
pub struct RawTimeSeries<K> {
    index: Vec<K>,
    #[serde(deserialize_with = "missing_as_nan")]
    values: Vec<f64>,
}

/// JSON has no NaN; serde_json writes it as `null`.
fn missing_as_nan<'de, D>(deserializer: D) -> std::result::Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

impl<K> TryFrom<RawTimeSeries<K>> for TimeSeries<K> {
    type Error = AlgebraError;

    fn try_from(raw: RawTimeSeries<K>) -> Result<Self> {
        Self::new(raw.index, raw.values)
    }
}

impl<K> TimeSeries<K> {
    /// Create a series from an index and matching values.
    pub fn new(index: Vec<K>, values: Vec<f64>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(AlgebraError::LengthMismatch {
                index: index.len(),
                values: values.len(),
            });
        }
        Ok(Self { index, values })
    }

    pub(crate) fn from_parts_unchecked(index: Vec<K>, values: Vec<f64>) -> Self {
        debug_assert_eq!(index.len(), values.len());
        Self { index, values }
    }

    /// Series with no observations.
    pub fn empty() -> Self {
        Self {
            index: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build a series from `(timestamp, value)` pairs, keeping their order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let (index, values) = pairs.into_iter().unzip();
        Self { index, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Timestamps, in storage order.
    pub fn index(&self) -> &[K] {
        &self.index
    }

    /// Values, aligned with [`TimeSeries::index`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Split into index and values.
    pub fn into_parts(self) -> (Vec<K>, Vec<f64>) {
        (self.index, self.values)
    }

    /// Apply `f` to every value, keeping the index unchanged.
    pub fn map_values<F>(&self, f: F) -> Self
    where
        K: Clone,
        F: Fn(f64) -> f64,
    {
        Self {
            index: self.index.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl<K: Timestamp> TimeSeries<K> {
    /// Iterate over `(timestamp, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }

    /// Value observed at `timestamp`, if any.
    ///
    /// Uses binary search, so the series must be ascending.
    pub fn get(&self, timestamp: &K) -> Option<f64> {
        self.index
            .binary_search(timestamp)
            .ok()
            .map(|i| self.values[i])
    }

    pub fn first(&self) -> Option<(K, f64)> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<(K, f64)> {
        match (self.index.last(), self.values.last()) {
            (Some(&t), Some(&v)) => Some((t, v)),
            _ => None,
        }
    }

    /// Whether every timestamp is strictly greater than the one before it.
    pub fn is_strictly_ascending(&self) -> bool {
        self.index.windows(2).all(|w| w[0] < w[1])
    }

    /// Check the strictly-ascending precondition.
    ///
    /// The error names the first position whose timestamp is not greater
    /// than its predecessor.
    pub fn ensure_ascending(&self) -> Result<()> {
        match self.index.windows(2).position(|w| w[0] >= w[1]) {
            Some(i) => Err(AlgebraError::NotAscending { position: i + 1 }),
            None => Ok(()),
        }
    }
}

impl TimeSeries<NaiveDate> {
    /// Series on consecutive calendar days starting at `start`.
    pub fn daily(start: NaiveDate, values: Vec<f64>) -> Self {
        let index = start.iter_days().take(values.len()).collect();
        Self { index, values }
    }
}

impl<K> Default for TimeSeries<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K> FromIterator<(K, f64)> for TimeSeries<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_length_mismatch() {
        let result = TimeSeries::new(vec![1i64, 2], vec![1.0]);
        assert_eq!(
            result.unwrap_err(),
            AlgebraError::LengthMismatch { index: 2, values: 1 }
        );
    }

    #[test]
    fn test_new_does_not_check_order() {
        let series = TimeSeries::new(vec![3i64, 1], vec![1.0, 2.0]).unwrap();
        assert_eq!(series.len(), 2);
        assert!(!series.is_strictly_ascending());
    }

    #[test]
    fn test_empty() {
        let series: TimeSeries = TimeSeries::empty();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.first().is_none());
        assert!(series.last().is_none());
        assert!(series.is_strictly_ascending());
    }

    #[test]
    fn test_daily() {
        let series = TimeSeries::daily(date(2020, 1, 30), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            series.index(),
            &[date(2020, 1, 30), date(2020, 1, 31), date(2020, 2, 1)]
        );
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_pairs_and_get() {
        let series: TimeSeries<i64> = vec![(10, 1.5), (20, 2.5), (30, 3.5)].into_iter().collect();
        assert_eq!(series.get(&20), Some(2.5));
        assert_eq!(series.get(&25), None);
        assert_eq!(series.first(), Some((10, 1.5)));
        assert_eq!(series.last(), Some((30, 3.5)));
    }

    #[test]
    fn test_ensure_ascending_ok() {
        let series = TimeSeries::daily(date(2020, 1, 1), vec![1.0, 2.0]);
        assert!(series.ensure_ascending().is_ok());
    }

    #[test]
    fn test_ensure_ascending_reports_position() {
        let series = TimeSeries::new(vec![1i64, 2, 2, 4], vec![0.0; 4]).unwrap();
        assert_eq!(
            series.ensure_ascending().unwrap_err(),
            AlgebraError::NotAscending { position: 2 }
        );
    }

    #[test]
    fn test_ensure_ascending_descending() {
        let series = TimeSeries::new(vec![5i64, 4], vec![0.0; 2]).unwrap();
        assert_eq!(
            series.ensure_ascending().unwrap_err(),
            AlgebraError::NotAscending { position: 1 }
        );
    }

    #[test]
    fn test_map_values_keeps_index() {
        let series = TimeSeries::new(vec![1i64, 2, 3], vec![1.0, -2.0, 3.0]).unwrap();
        let doubled = series.map_values(|v| v * 2.0);
        assert_eq!(doubled.index(), series.index());
        assert_eq!(doubled.values(), &[2.0, -4.0, 6.0]);
    }

    #[test]
    fn test_iter() {
        let series = TimeSeries::new(vec![1i64, 2], vec![0.5, 0.25]).unwrap();
        let pairs: Vec<_> = series.iter().collect();
        assert_eq!(pairs, vec![(1, 0.5), (2, 0.25)]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let series = TimeSeries::daily(date(2024, 1, 1), vec![100.0, 101.5]);
        let json = serde_json::to_string(&series).unwrap();
        let deserialized: TimeSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, deserialized);
    }

    #[test]
    fn test_serde_roundtrip_with_missing_values() {
        let series = TimeSeries::daily(date(2020, 1, 1), vec![f64::NAN, 3.0, f64::NAN]);
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains("null"));

        let deserialized: TimeSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.index(), series.index());
        assert!(deserialized.values()[0].is_nan());
        assert_eq!(deserialized.values()[1], 3.0);
        assert!(deserialized.values()[2].is_nan());
    }

    #[test]
    fn test_deserialize_rejects_length_mismatch() {
        let json = r#"{"index":[1,2,3],"values":[1.0]}"#;
        let result: std::result::Result<TimeSeries<i64>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
