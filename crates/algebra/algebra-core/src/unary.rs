//! Unary operators: exp, log, power, sqrt, abs, floor, ceil.
//!
//! Each maps values one at a time and leaves the index unchanged. Numeric
//! edge cases (log of non-positive, sqrt of negative) produce the IEEE-754
//! result rather than an error.

use algebra_api::{BoundConfig, PowerConfig};
use algebra_spi::{ElementwiseTransform, Operand, Result, TimeSeries, Timestamp};
use tracing::warn;

/// `R_t = e^{X_t}`
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl ElementwiseTransform for Exp {
    fn name(&self) -> &str {
        "exp"
    }

    fn apply_value(&self, value: f64) -> f64 {
        value.exp()
    }
}

/// `R_t = ln(X_t)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Log;

impl ElementwiseTransform for Log {
    fn name(&self) -> &str {
        "log"
    }

    fn apply_value(&self, value: f64) -> f64 {
        value.ln()
    }
}

/// `R_t = X_t^y`
#[derive(Debug, Clone, Copy)]
pub struct Power {
    exponent: f64,
}

impl Power {
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }

    pub fn from_config(config: PowerConfig) -> Self {
        Self {
            exponent: config.exponent,
        }
    }
}

impl Default for Power {
    fn default() -> Self {
        Self::from_config(PowerConfig::default())
    }
}

impl ElementwiseTransform for Power {
    fn name(&self) -> &str {
        "power"
    }

    fn apply_value(&self, value: f64) -> f64 {
        value.powf(self.exponent)
    }
}

/// `R_t = sqrt(X_t)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqrt;

impl ElementwiseTransform for Sqrt {
    fn name(&self) -> &str {
        "sqrt"
    }

    fn apply_value(&self, value: f64) -> f64 {
        value.sqrt()
    }
}

/// `R_t = |X_t|`
#[derive(Debug, Clone, Copy, Default)]
pub struct Abs;

impl ElementwiseTransform for Abs {
    fn name(&self) -> &str {
        "abs"
    }

    fn apply_value(&self, value: f64) -> f64 {
        value.abs()
    }
}

/// Floor at a minimum value: `R_t = max(X_t, value)`.
///
/// Missing values stay missing.
#[derive(Debug, Clone, Copy)]
pub struct Floor {
    value: f64,
}

impl Floor {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn from_config(config: BoundConfig) -> Self {
        Self { value: config.value }
    }
}

impl Default for Floor {
    fn default() -> Self {
        Self::from_config(BoundConfig::default())
    }
}

impl ElementwiseTransform for Floor {
    fn name(&self) -> &str {
        "floor"
    }

    fn apply_value(&self, value: f64) -> f64 {
        // f64::max would return the bound for a NaN input
        if value.is_nan() {
            value
        } else {
            value.max(self.value)
        }
    }

    fn requires_ascending(&self) -> bool {
        true
    }
}

/// Cap at a maximum value: `R_t = min(X_t, value)`.
///
/// Missing values stay missing.
#[derive(Debug, Clone, Copy)]
pub struct Ceil {
    value: f64,
}

impl Ceil {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn from_config(config: BoundConfig) -> Self {
        Self { value: config.value }
    }
}

impl Default for Ceil {
    fn default() -> Self {
        Self::from_config(BoundConfig::default())
    }
}

impl ElementwiseTransform for Ceil {
    fn name(&self) -> &str {
        "ceil"
    }

    fn apply_value(&self, value: f64) -> f64 {
        if value.is_nan() {
            value
        } else {
            value.min(self.value)
        }
    }

    fn requires_ascending(&self) -> bool {
        true
    }
}

fn map<K: Timestamp, T: ElementwiseTransform>(op: &T, x: &TimeSeries<K>) -> TimeSeries<K> {
    x.map_values(|v| op.apply_value(v))
}

fn bounded<K: Timestamp, T: ElementwiseTransform>(
    op: &T,
    x: &TimeSeries<K>,
) -> Result<TimeSeries<K>> {
    op.transform(x).map_err(|err| {
        warn!(operator = op.name(), error = %err, "series rejected");
        err
    })
}

/// Exponential of each value.
pub fn exp<K: Timestamp>(x: &TimeSeries<K>) -> TimeSeries<K> {
    map(&Exp, x)
}

/// Natural logarithm of each value.
pub fn log<K: Timestamp>(x: &TimeSeries<K>) -> TimeSeries<K> {
    map(&Log, x)
}

/// Raise each value to the power `y`.
pub fn power<K: Timestamp>(x: &TimeSeries<K>, y: f64) -> TimeSeries<K> {
    map(&Power::new(y), x)
}

/// Square root of a number, or of each value of a series.
pub fn sqrt<K: Timestamp>(x: impl Into<Operand<K>>) -> Operand<K> {
    match x.into() {
        Operand::Scalar(v) => Operand::Scalar(Sqrt.apply_value(v)),
        Operand::Series(s) => Operand::Series(map(&Sqrt, &s)),
    }
}

/// Absolute value of each value.
pub fn abs<K: Timestamp>(x: &TimeSeries<K>) -> TimeSeries<K> {
    map(&Abs, x)
}

/// Floor each value at `value`.
///
/// # Errors
///
/// [`algebra_spi::AlgebraError::NotAscending`] if `x` is not strictly
/// ascending by timestamp.
pub fn floor<K: Timestamp>(x: &TimeSeries<K>, value: f64) -> Result<TimeSeries<K>> {
    bounded(&Floor::new(value), x)
}

/// Cap each value at `value`.
///
/// # Errors
///
/// [`algebra_spi::AlgebraError::NotAscending`] if `x` is not strictly
/// ascending by timestamp.
pub fn ceil<K: Timestamp>(x: &TimeSeries<K>, value: f64) -> Result<TimeSeries<K>> {
    bounded(&Ceil::new(value), x)
}
