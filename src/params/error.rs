//----------------------------------------
// parameter errors
//----------------------------------------
use crate::error::HyplabErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidParameterError {
    #[error("confidence level should be in (0, 1); got {0}")]
    ConfidenceOutOfRange(f64),
    #[error(
        "two-sided interval needs confidence level of at least 0.5 \
        (effective confidence 2c - 1 = {effective}); got {confidence}"
    )]
    EffectiveConfidenceNegative { confidence: f64, effective: f64 },
    #[error("sample needs at least 2 observations for n - 1 degrees of freedom; got {0}")]
    TooFewObservations(usize),
    #[error("sample has zero standard error; t statistic is undefined")]
    ZeroStandardError,
    #[error("hypothesised mean should be finite; got {0}")]
    NonFiniteMean(f64),
    #[error("unrecognised alternative hypothesis `{0}`")]
    UnknownAlternative(String),
    #[error("one-sided test needs `less` or `greater`; got two-sided")]
    NotOneSided,
    #[error("unrecognised dataset `{0}`")]
    UnknownDataset(String),
    #[error("unrecognised choice `{0}`; expected `accept` or `reject`")]
    UnknownChoice(String),
    #[error("p-value should be in [0, 1]; got {0}")]
    PValueOutOfRange(f64),
    #[error(
        "histogram bins need a finite positive size and end > start; \
        got start {start}, end {end}, size {size}"
    )]
    BadHistogramBins { start: f64, end: f64, size: f64 },
    #[error("histogram would need {0} bins; at most {1} are drawn")]
    TooManyBins(f64, usize),
    #[error("could not construct t distribution with {0} degrees of freedom")]
    DegreesOfFreedom(f64),
}

impl Into<HyplabErr> for InvalidParameterError {
    fn into(self) -> HyplabErr {
        HyplabErr::InvalidParameter(self)
    }
}
