//----------------------------------------
// Runtime configuration
//----------------------------------------
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the dataset directory
pub const DATA_DIR_VAR: &str = "HYPLAB_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Confidence slider range and starting position
pub const MIN_CONFIDENCE: f64 = 0.80;
pub const MAX_CONFIDENCE: f64 = 0.99;
pub const DEFAULT_CONFIDENCE: f64 = 0.95;
pub const CONFIDENCE_MARKS: [f64; 5] = [0.80, 0.85, 0.90, 0.95, 0.99];

#[derive(Debug, Clone, PartialEq)]
pub struct LabConfig {
    pub data_dir: PathBuf,
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl LabConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        LabConfig {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_env() -> Self {
        match env::var_os(DATA_DIR_VAR) {
            Some(dir) if !dir.is_empty() => LabConfig::new(dir),
            _ => LabConfig::default(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Config pointing at the datasets shipped with the crate
    #[cfg(test)]
    pub(crate) fn bundled() -> Self {
        LabConfig::new(Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_DIR))
    }
}
