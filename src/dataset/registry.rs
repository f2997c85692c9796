use tracing::info;

use crate::config::LabConfig;
use crate::dataset::load::load;
use crate::dataset::types::{Dataset, DatasetName};
use crate::error::HyplabErr;

/// The three lesson datasets, loaded once during start-up and then handed to
/// every computation by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRegistry {
    antacid: Dataset,
    grades: Dataset,
    rda: Dataset,
}

impl DatasetRegistry {
    /// Fails on the first dataset that cannot be read; there is nothing to
    /// retry since the files are static.
    pub fn load(config: &LabConfig) -> Result<Self, HyplabErr> {
        let registry = DatasetRegistry {
            antacid: load(DatasetName::Antacid, config)?,
            grades: load(DatasetName::Grades, config)?,
            rda: load(DatasetName::Rda, config)?,
        };
        info!(data_dir = %config.data_dir().display(), "dataset registry ready");
        Ok(registry)
    }

    pub fn get(&self, name: DatasetName) -> &Dataset {
        match name {
            DatasetName::Antacid => &self.antacid,
            DatasetName::Grades => &self.grades,
            DatasetName::Rda => &self.rda,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        DatasetName::ALL.into_iter().map(|name| self.get(name))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::dataset::error::DataLoadError;

    #[test]
    fn bundled_registry() {
        let registry =
            DatasetRegistry::load(&LabConfig::bundled()).expect("failed to load registry");
        let sizes: Vec<usize> = registry.iter().map(|d| d.len()).collect();
        assert_eq!(sizes, vec![15, 30, 45]);
        for name in DatasetName::ALL {
            assert_eq!(registry.get(name).name(), name);
        }
    }

    #[test]
    fn missing_directory_is_fatal() {
        let result = DatasetRegistry::load(&LabConfig::new("/nonexistent/hyplab"));
        assert!(matches!(
            result,
            Err(HyplabErr::DataLoad(DataLoadError::Read { .. }))
        ));
    }
}
