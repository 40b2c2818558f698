//! Algebra configuration types.

use algebra_spi::{AlgebraError, Interpolate, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Alignment
// ============================================================================

/// Alignment configuration for binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Alignment method (default: step).
    #[serde(default)]
    pub method: Interpolate,
}

impl AlignConfig {
    pub fn new(method: Interpolate) -> Self {
        Self { method }
    }

    /// Only timestamps present in both series.
    pub fn intersect() -> Self {
        Self::new(Interpolate::Intersect)
    }

    /// Union of timestamps with step interpolation.
    pub fn step() -> Self {
        Self::new(Interpolate::Step)
    }
}

// ============================================================================
// Unary operators
// ============================================================================

/// Bound for `floor` (minimum) and `ceil` (maximum).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundConfig {
    /// Bound value (default: 0).
    pub value: f64,
}

impl BoundConfig {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Default for BoundConfig {
    fn default() -> Self {
        Self { value: 0.0 }
    }
}

/// Exponent for `power`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerConfig {
    /// Exponent (default: 1).
    pub exponent: f64,
}

impl PowerConfig {
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self { exponent: 1.0 }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Defaults for every configurable operator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AlgebraConfig {
    #[serde(default)]
    pub align: AlignConfig,
    #[serde(default)]
    pub floor: BoundConfig,
    #[serde(default)]
    pub ceil: BoundConfig,
    #[serde(default)]
    pub power: PowerConfig,
}

impl AlgebraConfig {
    /// Start building a configuration.
    pub fn builder() -> AlgebraConfigBuilder {
        AlgebraConfigBuilder::new()
    }
}

/// Builder for AlgebraConfig.
#[derive(Debug, Default)]
pub struct AlgebraConfigBuilder {
    method: Option<Interpolate>,
    method_name: Option<String>,
    floor: Option<f64>,
    ceil: Option<f64>,
    exponent: Option<f64>,
}

impl AlgebraConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alignment method.
    pub fn method(mut self, method: Interpolate) -> Self {
        self.method = Some(method);
        self.method_name = None;
        self
    }

    /// Set the alignment method by name (`intersect`, `nan`, `zero`, `step`, `union`).
    pub fn method_name(mut self, name: &str) -> Self {
        self.method_name = Some(name.to_string());
        self.method = None;
        self
    }

    /// Set the floor bound.
    pub fn floor(mut self, value: f64) -> Self {
        self.floor = Some(value);
        self
    }

    /// Set the ceil bound.
    pub fn ceil(mut self, value: f64) -> Self {
        self.ceil = Some(value);
        self
    }

    /// Set the power exponent.
    pub fn exponent(mut self, exponent: f64) -> Self {
        self.exponent = Some(exponent);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<AlgebraConfig> {
        let method = match (self.method, self.method_name) {
            (Some(method), _) => method,
            (None, Some(name)) => name.parse()?,
            (None, None) => Interpolate::default(),
        };

        let floor = finite("floor", self.floor.unwrap_or(0.0))?;
        let ceil = finite("ceil", self.ceil.unwrap_or(0.0))?;
        let exponent = finite("exponent", self.exponent.unwrap_or(1.0))?;

        Ok(AlgebraConfig {
            align: AlignConfig::new(method),
            floor: BoundConfig::new(floor),
            ceil: BoundConfig::new(ceil),
            power: PowerConfig::new(exponent),
        })
    }
}

fn finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AlgebraError::invalid_parameter(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}
