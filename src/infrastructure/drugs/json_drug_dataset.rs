use std::path::Path;

use serde_json::Value;

use crate::application::services::{DrugCatalog, normalize};
use crate::domain::{DrugRecord, RawDrugRecord};

const SAMPLE_DATASET: &str = include_str!("../../../data/drugs_sample.json");

#[derive(Debug, thiserror::Error)]
pub enum DrugDatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset is neither a list nor an object with a \"drugs\" list")]
    UnexpectedShape,
    #[error("dataset contains no usable drug records")]
    Empty,
}

/// Drug dataset stored as JSON, either a bare list or `{"drugs": [...]}`.
pub struct JsonDrugDataset;

impl JsonDrugDataset {
    pub fn load(path: &Path) -> Result<DrugCatalog, DrugDatasetError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<DrugCatalog, DrugDatasetError> {
        let entries = match serde_json::from_str::<Value>(contents)? {
            Value::Array(entries) => entries,
            Value::Object(mut fields) => match fields.remove("drugs") {
                Some(Value::Array(entries)) => entries,
                _ => return Err(DrugDatasetError::UnexpectedShape),
            },
            _ => return Err(DrugDatasetError::UnexpectedShape),
        };

        let total = entries.len();
        let records: Vec<DrugRecord> = entries
            .into_iter()
            .filter_map(RawDrugRecord::from_value)
            .filter_map(normalize)
            .collect();

        if records.len() < total {
            tracing::warn!(
                dropped = total - records.len(),
                "Dropped dataset entries without a usable name"
            );
        }
        if records.is_empty() {
            return Err(DrugDatasetError::Empty);
        }

        Ok(DrugCatalog::new(records))
    }

    /// Loads `path`, or the built-in sample set when the file is unset, missing, unreadable or empty.
    pub fn load_or_sample(path: Option<&Path>) -> DrugCatalog {
        let Some(path) = path else {
            tracing::info!("No drug dataset configured, using sample data");
            return Self::sample();
        };

        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), drugs = catalog.len(), "Drug dataset loaded");
                catalog
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Drug dataset unavailable, using sample data");
                Self::sample()
            }
        }
    }

    /// Ten canonical records bundled with the binary.
    pub fn sample() -> DrugCatalog {
        match serde_json::from_str::<Vec<DrugRecord>>(SAMPLE_DATASET) {
            Ok(records) => DrugCatalog::new(records),
            Err(e) => {
                tracing::error!(error = %e, "Bundled sample dataset is invalid");
                DrugCatalog::default()
            }
        }
    }
}
