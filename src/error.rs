//----------------------------------------
// Crate error type
//----------------------------------------
use crate::dataset::error::DataLoadError;
use crate::params::error::InvalidParameterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HyplabErr {
    #[error("while loading dataset: {0}")]
    DataLoad(DataLoadError),
    #[error("invalid parameter: {0}")]
    InvalidParameter(InvalidParameterError),
}
