//! Alignment methods for combining timeseries with different indices.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlgebraError;

/// How two timeseries with non-identical timestamps are reconciled.
///
/// | Method      | Resulting index | Value where a side has no observation |
/// |-------------|-----------------|---------------------------------------|
/// | `Intersect` | intersection    | (timestamp dropped)                   |
/// | `Nan`       | union           | missing (`NaN`)                       |
/// | `Zero`      | union           | `0.0`                                 |
/// | `Step`      | union           | last prior observation, else missing  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolate {
    /// Only timestamps present in both series
    Intersect,
    /// Union of timestamps, absent values treated as missing
    Nan,
    /// Union of timestamps, absent values treated as zero
    #[serde(alias = "union")]
    Zero,
    /// Union of timestamps, absent values carried forward from the last observation
    #[default]
    Step,
}

impl Interpolate {
    /// All supported methods.
    pub const ALL: [Interpolate; 4] = [
        Interpolate::Intersect,
        Interpolate::Nan,
        Interpolate::Zero,
        Interpolate::Step,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interpolate::Intersect => "intersect",
            Interpolate::Nan => "nan",
            Interpolate::Zero => "zero",
            Interpolate::Step => "step",
        }
    }
}

impl std::fmt::Display for Interpolate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interpolate {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intersect" => Ok(Interpolate::Intersect),
            "nan" => Ok(Interpolate::Nan),
            // "union" is the legacy name for zero-filled union alignment
            "zero" | "union" => Ok(Interpolate::Zero),
            "step" => Ok(Interpolate::Step),
            other => Err(AlgebraError::invalid_parameter(
                "method",
                format!("unknown interpolation method '{}'", other),
            )),
        }
    }
}
