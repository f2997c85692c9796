use crate::error::HyplabErr;
use crate::params::error::InvalidParameterError;

pub(crate) fn check_confidence(confidence_level: f64) -> Result<f64, HyplabErr> {
    // Also rejects NaN
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(InvalidParameterError::ConfidenceOutOfRange(confidence_level).into());
    }
    Ok(confidence_level)
}

pub(crate) fn check_hypothesised_mean(hypothesised_mean: f64) -> Result<f64, HyplabErr> {
    if !hypothesised_mean.is_finite() {
        return Err(InvalidParameterError::NonFiniteMean(hypothesised_mean).into());
    }
    Ok(hypothesised_mean)
}

pub(crate) fn check_p_value(p_value: f64) -> Result<f64, HyplabErr> {
    if !(0.0..=1.0).contains(&p_value) {
        return Err(InvalidParameterError::PValueOutOfRange(p_value).into());
    }
    Ok(p_value)
}
