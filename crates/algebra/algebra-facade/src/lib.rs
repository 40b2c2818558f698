//! Timeseries Algebra Facade
//!
//! Unified re-exports for the algebra module.
//!
//! This facade provides a single entry point for all algebra functionality:
//! - `algebra_spi` - Series model, alignment methods, errors and operator traits
//! - `algebra_api` - Configuration types and builders
//! - `algebra_core` - Alignment engine and operators
//!
//! # Example
//!
//! ```rust
//! use algebra_facade::{add, Interpolate, NaiveDate, TimeSeries};
//!
//! let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
//! let a = TimeSeries::new(vec![d(1), d(3)], vec![1.0, 3.0]).unwrap();
//! let b = TimeSeries::new(vec![d(2), d(3)], vec![2.0, 4.0]).unwrap();
//!
//! let sum = add(a.clone(), b.clone(), Interpolate::Step).unwrap().into_series().unwrap();
//! assert_eq!(sum.index(), &[d(1), d(2), d(3)]);
//! assert!(sum.values()[0].is_nan()); // b has no observation yet
//! assert_eq!(&sum.values()[1..], &[3.0, 7.0]);
//!
//! let sum = add(a, b, Interpolate::Intersect).unwrap().into_series().unwrap();
//! assert_eq!(sum.values(), &[7.0]);
//! ```

// Re-export everything from SPI
pub use algebra_spi::*;

// Re-export everything from API
pub use algebra_api::*;

// Re-export everything from Core
pub use algebra_core::*;

pub use chrono::NaiveDate;
