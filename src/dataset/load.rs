use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::LabConfig;
use crate::dataset::error::DataLoadError;
use crate::dataset::types::{Dataset, DatasetName};
use crate::error::HyplabErr;

#[derive(Debug, Deserialize)]
struct Observation {
    #[serde(alias = "antacid", alias = "grades", alias = "rda")]
    value: f64,
}

/// Reads `<data_dir>/<name>.csv`
pub fn load(name: DatasetName, config: &LabConfig) -> Result<Dataset, HyplabErr> {
    load_from_path(name, &config.data_dir().join(name.file_name()))
}

/// Reads a header row naming the dataset's column followed by one
/// observation per row. Every observation must be finite and at least one
/// must be present.
pub fn load_from_path(name: DatasetName, path: &Path) -> Result<Dataset, HyplabErr> {
    let path_text = path.display().to_string();
    debug!(dataset = %name, path = %path_text, "reading dataset");

    let mut csv_reader = match ReaderBuilder::new().trim(Trim::All).from_path(path) {
        Ok(reader) => reader,
        Err(source) => {
            return Err(DataLoadError::Read {
                path: path_text,
                source,
            }
            .into());
        }
    };

    let has_column = match csv_reader.headers() {
        Ok(headers) => headers.iter().any(|h| h == name.column()),
        Err(source) => {
            return Err(DataLoadError::Read {
                path: path_text,
                source,
            }
            .into());
        }
    };
    if !has_column {
        return Err(DataLoadError::MissingColumn {
            path: path_text,
            column: name.column(),
        }
        .into());
    }

    let mut values = Vec::new();
    for (i, result) in csv_reader.deserialize::<Observation>().enumerate() {
        // Header occupies row 1
        let row = i + 2;
        let observation = match result {
            Ok(observation) => observation,
            Err(source) => {
                return Err(DataLoadError::Parse {
                    path: path_text,
                    row,
                    source,
                }
                .into());
            }
        };
        if !observation.value.is_finite() {
            return Err(DataLoadError::NonFinite {
                path: path_text,
                row,
                value: observation.value,
            }
            .into());
        }
        values.push(observation.value);
    }

    if values.is_empty() {
        return Err(DataLoadError::Empty { path: path_text }.into());
    }

    info!(dataset = %name, n = values.len(), "loaded dataset");
    Ok(Dataset::new(name, values))
}

#[cfg(test)]
mod tests {

    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn scratch_file(file_name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hyplab-load-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("failed to create scratch dir");
        let path = dir.join(file_name);
        fs::write(&path, contents).expect("failed to write scratch file");
        path
    }

    #[test]
    fn bundled_antacid() {
        let dataset = load(DatasetName::Antacid, &LabConfig::bundled())
            .expect("failed to load bundled antacid data");
        assert_eq!(dataset.name(), DatasetName::Antacid);
        assert_eq!(dataset.len(), 15);
        assert_eq!(dataset.values()[0], 11.2);
        assert_eq!(dataset.values()[14], 9.2);
    }

    #[test]
    fn loads_with_debug_logging() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let dataset = tracing::subscriber::with_default(subscriber, || {
            load(DatasetName::Grades, &LabConfig::bundled())
        })
        .expect("failed to load grades with debug logging on");
        assert_eq!(dataset.len(), 30);
    }

    #[test]
    fn bundled_sizes() {
        let config = LabConfig::bundled();
        assert_eq!(load(DatasetName::Grades, &config).unwrap().len(), 30);
        assert_eq!(load(DatasetName::Rda, &config).unwrap().len(), 45);
    }

    #[test]
    fn loading_twice_is_identical() {
        let config = LabConfig::bundled();
        assert_eq!(
            load(DatasetName::Rda, &config).unwrap(),
            load(DatasetName::Rda, &config).unwrap()
        );
    }

    #[test]
    fn missing_file_error() {
        let config = LabConfig::new("/nonexistent/hyplab");
        if let Err(HyplabErr::DataLoad(DataLoadError::Read { path, .. })) =
            load(DatasetName::Grades, &config)
        {
            assert!(path.ends_with("grades.csv"));
        } else {
            panic!()
        }
    }

    #[test]
    fn missing_column_error() {
        let path = scratch_file("wrong_column.csv", "rda\n1.0\n2.0\n");
        if let Err(e) = load_from_path(DatasetName::Antacid, &path) {
            assert_eq!(
                format!(
                    "while loading dataset: {} has no `antacid` column",
                    path.display()
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn unparsable_row_error() {
        let path = scratch_file("bad_row.csv", "grades\n81\neighty\n90\n");
        if let Err(HyplabErr::DataLoad(DataLoadError::Parse { row, .. })) =
            load_from_path(DatasetName::Grades, &path)
        {
            assert_eq!(row, 3);
        } else {
            panic!()
        }
    }

    #[test]
    fn non_finite_row_error() {
        let path = scratch_file("nan_row.csv", "rda\n12.5\nNaN\n");
        if let Err(HyplabErr::DataLoad(DataLoadError::NonFinite { row, .. })) =
            load_from_path(DatasetName::Rda, &path)
        {
            assert_eq!(row, 3);
        } else {
            panic!()
        }
    }

    #[test]
    fn empty_file_error() {
        let path = scratch_file("header_only.csv", "antacid\n");
        if let Err(e) = load_from_path(DatasetName::Antacid, &path) {
            assert_eq!(
                format!(
                    "while loading dataset: {} contains no observations",
                    path.display()
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
