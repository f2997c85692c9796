//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::dataset::histogram::{Bin, HistogramBins};
pub use crate::dataset::profile::DatasetProfile;
pub use crate::dataset::types::{Dataset, DatasetName};
pub use crate::estimation::sample_stats::SampleStats;
pub use crate::estimation::types::ConfidenceInterval;
pub use crate::hypothesis::types::{BoundLabel, EvaluationResult, OneSidedOutcome, TwoSidedOutcome};
pub use crate::params::types::{Alternative, Sidedness, TestParameters, UserChoice};
pub use crate::summary::annotation::{Arrow, IntervalAnnotation};
pub use crate::verdict::types::{Decision, Judgement, Verdict};
