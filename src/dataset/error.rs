//----------------------------------------
// Dataset errors
//----------------------------------------
use crate::error::HyplabErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("could not read {path}: {source}")]
    Read { path: String, source: csv::Error },
    #[error("{path} has no `{column}` column")]
    MissingColumn { path: String, column: &'static str },
    #[error("could not parse row {row} of {path}: {source}")]
    Parse {
        path: String,
        row: usize,
        source: csv::Error,
    },
    #[error("row {row} of {path} is not a finite number; got {value}")]
    NonFinite { path: String, row: usize, value: f64 },
    #[error("{path} contains no observations")]
    Empty { path: String },
}

impl Into<HyplabErr> for DataLoadError {
    fn into(self) -> HyplabErr {
        HyplabErr::DataLoad(self)
    }
}
