use statrs::statistics::Statistics;

use crate::dataset::types::Dataset;
use crate::error::HyplabErr;
use crate::params::error::InvalidParameterError;

/// Summary of a sample needed by every t procedure. Recomputed from the full
/// sample on each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub n: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator) over sqrt(n)
    pub standard_error: f64,
    pub df: f64,
}

impl SampleStats {
    pub fn from_values(values: &[f64]) -> Result<Self, HyplabErr> {
        let n = values.len();
        if n < 2 {
            return Err(InvalidParameterError::TooFewObservations(n).into());
        }
        let mean = values.iter().mean();
        let std_dev = values.iter().std_dev();
        Ok(SampleStats {
            n,
            mean,
            standard_error: std_dev / (n as f64).sqrt(),
            df: (n - 1) as f64,
        })
    }

    pub fn from_dataset(dataset: &Dataset) -> Result<Self, HyplabErr> {
        SampleStats::from_values(dataset.values())
    }
}
