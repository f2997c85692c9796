use statrs::distribution::ContinuousCDF;
use tracing::debug;

use crate::dataset::types::Dataset;
use crate::error::HyplabErr;
use crate::estimation::sample_stats::SampleStats;
use crate::estimation::t_dist::standard_t;
use crate::estimation::types::ConfidenceInterval;
use crate::params::error::InvalidParameterError;
use crate::params::types::Sidedness;
use crate::params::validate::check_confidence;

/// Confidence passed to the t interval for a given slider position.
///
/// One-sided displays use the slider value as-is (so the single bound shown
/// comes from a two-tailed critical value). Two-sided displays narrow the
/// interval to `2c - 1`. Both framings are kept exactly as the lesson has
/// always shown them.
pub fn effective_confidence(confidence_level: f64, sidedness: Sidedness) -> Result<f64, HyplabErr> {
    let confidence_level = check_confidence(confidence_level)?;
    match sidedness {
        Sidedness::OneSided => Ok(confidence_level),
        Sidedness::TwoSided => {
            let effective = 2. * confidence_level - 1.;
            if effective < 0. {
                return Err(InvalidParameterError::EffectiveConfidenceNegative {
                    confidence: confidence_level,
                    effective,
                }
                .into());
            }
            Ok(effective)
        }
    }
}

/// Central Student's t interval `mean -/+ t_{(1+c)/2, n-1} * sem`.
/// `confidence` may be 0, which collapses the interval onto the mean.
pub fn student_t_interval(
    stats: &SampleStats,
    confidence: f64,
) -> Result<ConfidenceInterval, HyplabErr> {
    if !(0. ..1.).contains(&confidence) {
        return Err(InvalidParameterError::ConfidenceOutOfRange(confidence).into());
    }
    let t = standard_t(stats.df)?;
    let critical = t.inverse_cdf((1. + confidence) / 2.);
    let half_width = critical * stats.standard_error;
    Ok(ConfidenceInterval {
        lower: stats.mean - half_width,
        upper: stats.mean + half_width,
    })
}

pub fn estimate_interval(
    dataset: &Dataset,
    confidence_level: f64,
    sidedness: Sidedness,
) -> Result<ConfidenceInterval, HyplabErr> {
    let effective = effective_confidence(confidence_level, sidedness)?;
    let stats = SampleStats::from_dataset(dataset)?;
    let interval = student_t_interval(&stats, effective)?;
    debug!(
        dataset = %dataset.name(),
        ?sidedness,
        confidence_level,
        effective,
        mean = stats.mean,
        standard_error = stats.standard_error,
        lower = interval.lower,
        upper = interval.upper,
        "estimated interval"
    );
    Ok(interval)
}
