//----------------------------------------
// hypothesis mod types
//----------------------------------------
use std::fmt;

use crate::estimation::sample_stats::SampleStats;
use crate::estimation::types::ConfidenceInterval;
use crate::params::types::TestParameters;
use crate::summary::format::format_p_value;

/// What the result line reports next to the p-value
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BoundLabel {
    UpperBound,
    LowerBound,
    ConfidenceInterval,
}

impl BoundLabel {
    pub fn text(&self) -> &'static str {
        match self {
            BoundLabel::UpperBound => "Upper bound for population mean",
            BoundLabel::LowerBound => "Lower bound for population mean",
            BoundLabel::ConfidenceInterval => "Confidence interval for population mean",
        }
    }
}

impl fmt::Display for BoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneSidedOutcome {
    pub p_value: f64,
    pub label: BoundLabel,
    /// The single bound on display
    pub bound: f64,
    pub interval: ConfidenceInterval,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoSidedOutcome {
    pub p_value: f64,
    pub label: BoundLabel,
    pub interval: ConfidenceInterval,
}

/// Everything a single submission produces
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub params: TestParameters,
    pub stats: SampleStats,
    pub interval: ConfidenceInterval,
    pub p_value: f64,
    pub label: BoundLabel,
    /// `"9.660"` for a bound, `"(9.842, 11.518)"` for an interval
    pub formatted_value: String,
}

impl EvaluationResult {
    /// `"0.007 (0.7%)"`
    pub fn p_value_text(&self) -> String {
        format_p_value(self.p_value)
    }

    /// `"Upper bound for population mean: 11.700"`
    pub fn bound_text(&self) -> String {
        format!("{}: {}", self.label, self.formatted_value)
    }
}
