//----------------------------------------
// Root lib
//----------------------------------------
//! Computation behind an interactive lesson on one-sample hypothesis tests.
//! Given one of three fixed teaching datasets, a hypothesised mean, the
//! direction of the alternative hypothesis and a confidence level, it
//! produces the t interval, the p-value, the result text and the
//! screen-reader description that goes with the histogram.

/// This module houses the public API for loading datasets, running tests and
/// judging the learner's conclusion
pub mod compute;
/// Data directory and confidence slider settings
pub mod config;
mod dataset;
/// This module contains error types
pub mod error;
mod estimation;
mod hypothesis;
mod params;
mod summary;
mod verdict;

pub use dataset::error::DataLoadError;
pub use params::error::InvalidParameterError;
