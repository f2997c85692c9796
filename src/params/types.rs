//----------------------------------------
// params mod types
//----------------------------------------
use std::fmt;
use std::str::FromStr;

use crate::dataset::types::DatasetName;
use crate::error::HyplabErr;
use crate::params::error::InvalidParameterError;

/// Direction of the alternative hypothesis, relative to the hypothesised mean.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Alternative {
    Less,
    Greater,
    #[default]
    TwoSided,
}

/// Framing of the confidence interval drawn for an alternative.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Sidedness {
    OneSided,
    TwoSided,
}

impl Alternative {
    pub fn sidedness(&self) -> Sidedness {
        match self {
            Alternative::Less | Alternative::Greater => Sidedness::OneSided,
            Alternative::TwoSided => Sidedness::TwoSided,
        }
    }

    /// Relation used in the natural-language alternative hypothesis
    pub fn relation(&self) -> &'static str {
        match self {
            Alternative::Less => "less than",
            Alternative::Greater => "greater than",
            Alternative::TwoSided => "NOT equal to",
        }
    }
}

// Accepts both the test names and the dropdown symbols
impl FromStr for Alternative {
    type Err = HyplabErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "less" | "<" => Ok(Alternative::Less),
            "greater" | ">" => Ok(Alternative::Greater),
            "two-sided" | "!=" => Ok(Alternative::TwoSided),
            other => Err(InvalidParameterError::UnknownAlternative(other.to_string()).into()),
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alternative::Less => "less",
            Alternative::Greater => "greater",
            Alternative::TwoSided => "two-sided",
        };
        f.write_str(name)
    }
}

/// The learner's conclusion about the null hypothesis.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UserChoice {
    Accept,
    Reject,
}

impl FromStr for UserChoice {
    type Err = HyplabErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "accept" => Ok(UserChoice::Accept),
            "reject" => Ok(UserChoice::Reject),
            other => Err(InvalidParameterError::UnknownChoice(other.to_string()).into()),
        }
    }
}

/// One evaluation request. Built fresh for every submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestParameters {
    pub dataset: DatasetName,
    pub hypothesised_mean: f64,
    pub alternative: Alternative,
    pub confidence_level: f64,
}

impl TestParameters {
    /// Parameters preloaded with the dataset's default hypothesised mean, a
    /// two-sided alternative and the default slider confidence.
    pub fn for_dataset(dataset: DatasetName) -> Self {
        TestParameters {
            dataset,
            hypothesised_mean: dataset.profile().default_hypothesised_mean,
            alternative: Alternative::default(),
            confidence_level: crate::config::DEFAULT_CONFIDENCE,
        }
    }
}
