//----------------------------------------
// verdict mod types
//----------------------------------------
use std::fmt;

/// What the decision rule says about the null hypothesis
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Decision {
    Accept,
    Reject,
}

/// Whether the learner's choice agrees with the decision rule
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => f.write_str("Correct"),
            Verdict::Incorrect => f.write_str("Incorrect"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Judgement {
    pub verdict: Verdict,
    pub decision: Decision,
    /// 1 - alpha
    pub threshold: f64,
    /// e.g. "0.030 is less than 0.05, so we reject the null hypothesis at
    /// the 95% confidence level"
    pub explanation: String,
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.verdict, self.explanation)
    }
}
