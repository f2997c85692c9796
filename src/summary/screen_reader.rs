use crate::hypothesis::types::EvaluationResult;
use crate::params::types::Alternative;
use crate::summary::format::{format_bound, format_mean};

/// Text alternative for the histogram with its interval annotation
pub fn histogram_description(result: &EvaluationResult) -> String {
    let params = &result.params;
    let interval = &result.interval;
    let annotation = match params.alternative {
        Alternative::Less => format!(
            "upper bound for population mean of {}",
            format_bound(interval.upper)
        ),
        Alternative::Greater => format!(
            "lower bound for population mean of {}",
            format_bound(interval.lower)
        ),
        Alternative::TwoSided => format!("confidence interval {interval}"),
    };
    format!(
        "Histogram of {} with {} and hypothesised mean of {}",
        params.dataset.profile().histogram_subject,
        annotation,
        format_mean(params.hypothesised_mean)
    )
}
