use crate::hypothesis::types::EvaluationResult;
use crate::params::types::Alternative;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
}

/// Geometry of the interval drawn over the histogram: a segment from
/// `start` to `end`, an arrow where the interval runs off the axis, ticks at
/// the finite bounds and a marker at the hypothesised mean.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalAnnotation {
    pub start: f64,
    pub end: f64,
    pub arrow: Option<Arrow>,
    pub ticks: Vec<f64>,
    pub hypothesised_mean: f64,
}

pub fn interval_annotation(result: &EvaluationResult) -> IntervalAnnotation {
    let bins = result.params.dataset.profile().bins;
    let interval = result.interval;
    let hypothesised_mean = result.params.hypothesised_mean;
    match result.params.alternative {
        Alternative::Less => IntervalAnnotation {
            start: bins.start,
            end: interval.upper,
            arrow: Some(Arrow::Left),
            ticks: vec![interval.upper],
            hypothesised_mean,
        },
        Alternative::Greater => IntervalAnnotation {
            start: interval.lower,
            end: bins.end,
            arrow: Some(Arrow::Right),
            ticks: vec![interval.lower],
            hypothesised_mean,
        },
        Alternative::TwoSided => IntervalAnnotation {
            start: interval.lower,
            end: interval.upper,
            arrow: None,
            ticks: vec![interval.lower, interval.upper],
            hypothesised_mean,
        },
    }
}
