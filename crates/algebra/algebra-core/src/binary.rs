//! Binary operators: add, subtract, multiply, divide.
//!
//! Each operator aligns its operands, then combines them pointwise over the
//! shared index. Division by zero follows IEEE-754 and is not an error. A
//! missing (`NaN`) operand yields a missing result.

use algebra_spi::{BinaryOperator, Interpolate, Operand, Result, Timestamp};

use crate::align::Aligner;

/// Elementwise arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arithmetic {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator for Arithmetic {
    fn name(&self) -> &str {
        match self {
            Arithmetic::Add => "add",
            Arithmetic::Subtract => "subtract",
            Arithmetic::Multiply => "multiply",
            Arithmetic::Divide => "divide",
        }
    }

    fn apply(&self, x: f64, y: f64) -> f64 {
        match self {
            Arithmetic::Add => x + y,
            Arithmetic::Subtract => x - y,
            Arithmetic::Multiply => x * y,
            Arithmetic::Divide => x / y,
        }
    }
}

/// Align `x` and `y` with `method`, then apply `op`.
pub fn combine<K: Timestamp>(
    x: impl Into<Operand<K>>,
    y: impl Into<Operand<K>>,
    op: Arithmetic,
    method: Interpolate,
) -> Result<Operand<K>> {
    Aligner::new(method).combine(x, y, &op)
}

/// `R_t = X_t + Y_t`
pub fn add<K: Timestamp>(
    x: impl Into<Operand<K>>,
    y: impl Into<Operand<K>>,
    method: Interpolate,
) -> Result<Operand<K>> {
    combine(x, y, Arithmetic::Add, method)
}

/// `R_t = X_t - Y_t`
///
/// Accepts every alignment method; the legacy `union` name maps to
/// [`Interpolate::Zero`].
pub fn subtract<K: Timestamp>(
    x: impl Into<Operand<K>>,
    y: impl Into<Operand<K>>,
    method: Interpolate,
) -> Result<Operand<K>> {
    combine(x, y, Arithmetic::Subtract, method)
}

/// `R_t = X_t * Y_t`
pub fn multiply<K: Timestamp>(
    x: impl Into<Operand<K>>,
    y: impl Into<Operand<K>>,
    method: Interpolate,
) -> Result<Operand<K>> {
    combine(x, y, Arithmetic::Multiply, method)
}

/// `R_t = X_t / Y_t`
pub fn divide<K: Timestamp>(
    x: impl Into<Operand<K>>,
    y: impl Into<Operand<K>>,
    method: Interpolate,
) -> Result<Operand<K>> {
    combine(x, y, Arithmetic::Divide, method)
}
