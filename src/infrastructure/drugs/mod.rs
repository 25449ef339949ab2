mod json_drug_dataset;

pub use json_drug_dataset::{DrugDatasetError, JsonDrugDataset};
