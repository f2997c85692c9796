use tracing::debug;

use crate::dataset::registry::DatasetRegistry;
use crate::error::HyplabErr;
use crate::estimation::sample_stats::SampleStats;
use crate::hypothesis::one_sided::one_sided_test;
use crate::hypothesis::two_sided::two_sided_test;
use crate::hypothesis::types::EvaluationResult;
use crate::params::types::{Alternative, TestParameters};
use crate::summary::format::format_bound;

/// Runs the test a submission asks for and collects the interval, p-value
/// and result text. Stateless: identical parameters give identical results.
pub fn evaluate(
    registry: &DatasetRegistry,
    params: &TestParameters,
) -> Result<EvaluationResult, HyplabErr> {
    let dataset = registry.get(params.dataset);

    let (interval, p_value, label, formatted_value) = match params.alternative {
        Alternative::Less | Alternative::Greater => {
            let outcome = one_sided_test(
                dataset,
                params.hypothesised_mean,
                params.alternative,
                params.confidence_level,
            )?;
            (
                outcome.interval,
                outcome.p_value,
                outcome.label,
                format_bound(outcome.bound),
            )
        }
        Alternative::TwoSided => {
            let outcome =
                two_sided_test(dataset, params.hypothesised_mean, params.confidence_level)?;
            (
                outcome.interval,
                outcome.p_value,
                outcome.label,
                outcome.interval.to_string(),
            )
        }
    };
    let stats = SampleStats::from_dataset(dataset)?;

    debug!(
        dataset = %params.dataset,
        alternative = %params.alternative,
        hypothesised_mean = params.hypothesised_mean,
        confidence_level = params.confidence_level,
        p_value,
        value = %formatted_value,
        "evaluated submission"
    );

    Ok(EvaluationResult {
        params: *params,
        stats,
        interval,
        p_value,
        label,
        formatted_value,
    })
}
