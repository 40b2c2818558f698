//! Contracts implemented by the algebra core.

mod operator;

pub use operator::{BinaryOperator, ElementwiseTransform, Timestamp};
