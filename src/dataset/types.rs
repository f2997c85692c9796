//----------------------------------------
// dataset mod types
//----------------------------------------
use std::fmt;
use std::str::FromStr;

use crate::dataset::profile::{ANTACID, DatasetProfile, GRADES, RDA};
use crate::error::HyplabErr;
use crate::params::error::InvalidParameterError;

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DatasetName {
    #[default]
    Antacid,
    Grades,
    Rda,
}

impl DatasetName {
    pub const ALL: [DatasetName; 3] = [DatasetName::Antacid, DatasetName::Grades, DatasetName::Rda];

    /// Name of the single column in the backing file
    pub fn column(&self) -> &'static str {
        match self {
            DatasetName::Antacid => "antacid",
            DatasetName::Grades => "grades",
            DatasetName::Rda => "rda",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.column())
    }

    pub fn profile(&self) -> &'static DatasetProfile {
        match self {
            DatasetName::Antacid => &ANTACID,
            DatasetName::Grades => &GRADES,
            DatasetName::Rda => &RDA,
        }
    }
}

impl FromStr for DatasetName {
    type Err = HyplabErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetName::ALL
            .into_iter()
            .find(|name| name.column() == s.trim())
            .ok_or_else(|| InvalidParameterError::UnknownDataset(s.to_string()).into())
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Fixed sample of observations. Never mutated after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: DatasetName,
    values: Vec<f64>,
}

impl Dataset {
    pub fn new(name: DatasetName, values: Vec<f64>) -> Self {
        Dataset { name, values }
    }

    pub fn name(&self) -> DatasetName {
        self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
