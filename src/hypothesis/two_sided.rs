use crate::dataset::types::Dataset;
use crate::error::HyplabErr;
use crate::estimation::interval::estimate_interval;
use crate::estimation::sample_stats::SampleStats;
use crate::hypothesis::t_test::p_value;
use crate::hypothesis::types::{BoundLabel, TwoSidedOutcome};
use crate::params::types::{Alternative, Sidedness};
use crate::params::validate::check_hypothesised_mean;

/// Two-tailed test of H1: population mean != `hypothesised_mean`, reported
/// with the two-sided-mode interval (effective confidence `2c - 1`).
pub fn two_sided_test(
    dataset: &Dataset,
    hypothesised_mean: f64,
    confidence_level: f64,
) -> Result<TwoSidedOutcome, HyplabErr> {
    let hypothesised_mean = check_hypothesised_mean(hypothesised_mean)?;
    let interval = estimate_interval(dataset, confidence_level, Sidedness::TwoSided)?;
    let stats = SampleStats::from_dataset(dataset)?;
    let p_value = p_value(&stats, hypothesised_mean, Alternative::TwoSided)?;

    Ok(TwoSidedOutcome {
        p_value,
        label: BoundLabel::ConfidenceInterval,
        interval,
    })
}
