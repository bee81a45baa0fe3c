//! Descriptive statistics for sample sets.
//!
//! The crate has a single concern: reducing a slice of `f64` samples to a
//! fixed five-field [`Summary`](summary::Summary) of count, mean, sample
//! standard deviation, minimum and maximum.
//!
//! # Examples
//!
//! ```
//! use sampstat_stats::summary::Summary;
//!
//! let summary = Summary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(summary.count, 5.0);
//! assert_eq!(summary.mean, 3.0);
//! assert!((summary.std_dev - 2.5_f64.sqrt()).abs() < 1e-12);
//! ```

pub mod summary;
