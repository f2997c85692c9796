use crate::error::HyplabErr;
use crate::params::types::UserChoice;
use crate::params::validate::{check_confidence, check_p_value};
use crate::summary::format::{format_p, format_percent_whole, format_threshold};
use crate::verdict::types::{Decision, Judgement, Verdict};

/// Reject H0 iff `p_value < 1 - alpha`; the learner is correct when their
/// choice matches.
pub fn evaluate(p_value: f64, alpha: f64, user_choice: UserChoice) -> Result<Judgement, HyplabErr> {
    let alpha = check_confidence(alpha)?;
    let p_value = check_p_value(p_value)?;
    let threshold = 1. - alpha;

    let decision = if p_value < threshold {
        Decision::Reject
    } else {
        Decision::Accept
    };
    let verdict = match (user_choice, decision) {
        (UserChoice::Reject, Decision::Reject) | (UserChoice::Accept, Decision::Accept) => {
            Verdict::Correct
        }
        _ => Verdict::Incorrect,
    };

    let (comparison, action) = match decision {
        Decision::Reject => ("less", "reject"),
        Decision::Accept => ("greater", "accept"),
    };
    let explanation = format!(
        "{} is {} than {}, so we {} the null hypothesis at the {} confidence level",
        format_p(p_value),
        comparison,
        format_threshold(threshold),
        action,
        format_percent_whole(alpha),
    );

    Ok(Judgement {
        verdict,
        decision,
        threshold,
        explanation,
    })
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::params::error::InvalidParameterError;

    #[test]
    fn reject_at_003() {
        let judgement = evaluate(0.03, 0.95, UserChoice::Reject).unwrap();
        assert_eq!(judgement.verdict, Verdict::Correct);
        assert_eq!(judgement.decision, Decision::Reject);
        assert_eq!(
            judgement.to_string(),
            "Correct - 0.030 is less than 0.05, so we reject the null hypothesis at the \
            95% confidence level"
        );
    }

    #[test]
    fn accept_at_003() {
        let judgement = evaluate(0.03, 0.95, UserChoice::Accept).unwrap();
        assert_eq!(judgement.verdict, Verdict::Incorrect);
        assert_eq!(
            judgement.to_string(),
            "Incorrect - 0.030 is less than 0.05, so we reject the null hypothesis at the \
            95% confidence level"
        );
    }

    #[test]
    fn accept_large_p() {
        let judgement = evaluate(0.914, 0.9, UserChoice::Accept).unwrap();
        assert_eq!(judgement.verdict, Verdict::Correct);
        assert_eq!(
            judgement.explanation,
            "0.914 is greater than 0.10, so we accept the null hypothesis at the 90% \
            confidence level"
        );
        let judgement = evaluate(0.914, 0.9, UserChoice::Reject).unwrap();
        assert_eq!(judgement.verdict, Verdict::Incorrect);
        assert_eq!(judgement.decision, Decision::Accept);
    }

    #[test]
    fn stricter_level_flips_decision() {
        // 0.03 < 0.05 but not < 0.01
        let judgement = evaluate(0.03, 0.99, UserChoice::Reject).unwrap();
        assert_eq!(judgement.verdict, Verdict::Incorrect);
        assert_eq!(
            judgement.explanation,
            "0.030 is greater than 0.01, so we accept the null hypothesis at the 99% \
            confidence level"
        );
    }

    #[test]
    fn threshold_kept() {
        let judgement = evaluate(0.5, 0.8, UserChoice::Accept).unwrap();
        assert!((judgement.threshold - 0.2).abs() < 1e-12);
    }

    #[test]
    fn alpha_out_of_range() {
        assert!(matches!(
            evaluate(0.03, 1.0, UserChoice::Reject),
            Err(HyplabErr::InvalidParameter(
                InvalidParameterError::ConfidenceOutOfRange(_)
            ))
        ));
        assert!(matches!(
            evaluate(1.5, 0.95, UserChoice::Reject),
            Err(HyplabErr::InvalidParameter(
                InvalidParameterError::PValueOutOfRange(_)
            ))
        ));
    }
}
