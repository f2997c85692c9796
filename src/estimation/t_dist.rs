use statrs::distribution::StudentsT;

use crate::error::HyplabErr;
use crate::params::error::InvalidParameterError;

/// Standard Student's t with `df` degrees of freedom
pub(crate) fn standard_t(df: f64) -> Result<StudentsT, HyplabErr> {
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => Ok(dist),
        Err(_) => Err(InvalidParameterError::DegreesOfFreedom(df).into()),
    }
}
