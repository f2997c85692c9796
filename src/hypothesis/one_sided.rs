use crate::dataset::types::Dataset;
use crate::error::HyplabErr;
use crate::estimation::interval::estimate_interval;
use crate::estimation::sample_stats::SampleStats;
use crate::hypothesis::t_test::p_value;
use crate::hypothesis::types::{BoundLabel, OneSidedOutcome};
use crate::params::error::InvalidParameterError;
use crate::params::types::{Alternative, Sidedness};
use crate::params::validate::check_hypothesised_mean;

/// One-tailed test of H1: population mean `direction` `hypothesised_mean`,
/// reported with the matching bound of the one-sided-mode interval
/// (`Less` shows the upper bound, `Greater` the lower bound).
pub fn one_sided_test(
    dataset: &Dataset,
    hypothesised_mean: f64,
    direction: Alternative,
    confidence_level: f64,
) -> Result<OneSidedOutcome, HyplabErr> {
    let hypothesised_mean = check_hypothesised_mean(hypothesised_mean)?;
    let interval = estimate_interval(dataset, confidence_level, Sidedness::OneSided)?;
    let (label, bound) = match direction {
        Alternative::Less => (BoundLabel::UpperBound, interval.upper),
        Alternative::Greater => (BoundLabel::LowerBound, interval.lower),
        Alternative::TwoSided => return Err(InvalidParameterError::NotOneSided.into()),
    };
    let stats = SampleStats::from_dataset(dataset)?;
    let p_value = p_value(&stats, hypothesised_mean, direction)?;

    Ok(OneSidedOutcome {
        p_value,
        label,
        bound,
        interval,
    })
}

#[cfg(test)]
mod tests {

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::config::LabConfig;
    use crate::dataset::registry::DatasetRegistry;
    use crate::dataset::types::DatasetName;

    fn registry() -> DatasetRegistry {
        DatasetRegistry::load(&LabConfig::bundled()).expect("failed to load registry")
    }

    #[test]
    fn antacid_greater_12() {
        let registry = registry();
        let outcome =
            one_sided_test(registry.get(DatasetName::Antacid), 12., Alternative::Greater, 0.95)
                .unwrap();
        assert_abs_diff_eq!(outcome.p_value, 0.992549091775, epsilon = 1e-9);
        assert_eq!(outcome.label, BoundLabel::LowerBound);
        assert_abs_diff_eq!(outcome.bound, 9.659692799225, epsilon = 1e-6);
        assert_eq!(outcome.bound, outcome.interval.lower);
    }

    #[test]
    fn antacid_less_12() {
        let registry = registry();
        let outcome =
            one_sided_test(registry.get(DatasetName::Antacid), 12., Alternative::Less, 0.95)
                .unwrap();
        assert_relative_eq!(outcome.p_value, 0.00745090822547, max_relative = 1e-7);
        assert_eq!(outcome.label, BoundLabel::UpperBound);
        assert_abs_diff_eq!(outcome.bound, 11.700307200775, epsilon = 1e-6);
    }

    #[test]
    fn rda_less_18() {
        let registry = registry();
        let outcome =
            one_sided_test(registry.get(DatasetName::Rda), 18., Alternative::Less, 0.95).unwrap();
        assert_relative_eq!(outcome.p_value, 1.96874805377e-12, max_relative = 1e-6);
        assert_abs_diff_eq!(outcome.bound, 15.289843382043, epsilon = 1e-6);
    }

    #[test]
    fn bound_moves_away_from_mean_with_confidence() {
        let registry = registry();
        let antacid = registry.get(DatasetName::Antacid);
        let at_80 = one_sided_test(antacid, 12., Alternative::Less, 0.80).unwrap();
        let at_99 = one_sided_test(antacid, 12., Alternative::Less, 0.99).unwrap();
        assert_abs_diff_eq!(at_80.bound, 11.319851125545, epsilon = 1e-6);
        assert_abs_diff_eq!(at_99.bound, 12.096128743508, epsilon = 1e-6);
        // p-value does not depend on the confidence level
        assert_eq!(at_80.p_value, at_99.p_value);
    }

    #[test]
    fn two_sided_direction_error() {
        let registry = registry();
        if let Err(e) =
            one_sided_test(registry.get(DatasetName::Grades), 80., Alternative::TwoSided, 0.95)
        {
            assert_eq!(
                String::from(
                    "invalid parameter: one-sided test needs `less` or `greater`; got two-sided"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn dataset_left_untouched() {
        let registry = registry();
        let before = registry.get(DatasetName::Grades).clone();
        one_sided_test(registry.get(DatasetName::Grades), 80., Alternative::Greater, 0.9)
            .unwrap();
        assert_eq!(&before, registry.get(DatasetName::Grades));
    }
}
