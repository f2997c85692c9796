use crate::dataset::types::DatasetName;
use crate::params::types::Alternative;
use crate::summary::format::format_mean;

/// e.g. "The actual mean grade is equal to 80"
pub fn null_hypothesis(dataset: DatasetName, hypothesised_mean: f64) -> String {
    let profile = dataset.profile();
    format!(
        "{} {} {}{}",
        profile.mean_subject,
        profile.null_link,
        format_mean(hypothesised_mean),
        profile.unit
    )
}

/// e.g. "The actual mean intake of iron is less than 18 milligrams"
pub fn alternative_hypothesis(
    dataset: DatasetName,
    hypothesised_mean: f64,
    alternative: Alternative,
) -> String {
    let profile = dataset.profile();
    format!(
        "{} is {} {}{}",
        profile.mean_subject,
        alternative.relation(),
        format_mean(hypothesised_mean),
        profile.unit
    )
}
