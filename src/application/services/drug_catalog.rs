use crate::domain::{DrugRecord, RawDrugRecord};

/// Read-only, ordered set of canonical drug records.
///
/// Lookups are linear and deterministic; ties resolve by dataset order.
#[derive(Debug, Clone, Default)]
pub struct DrugCatalog {
    records: Vec<DrugRecord>,
}

impl DrugCatalog {
    pub fn new(records: Vec<DrugRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DrugRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolves a free-text drug name: exact name, then substring either way, then raw fields.
    pub fn lookup(&self, query: &str) -> Option<&DrugRecord> {
        let query = query.to_lowercase();

        self.records
            .iter()
            .find(|d| d.name.to_lowercase() == query)
            .or_else(|| {
                self.records.iter().find(|d| {
                    let name = d.name.to_lowercase();
                    name.contains(&query) || query.contains(&name)
                })
            })
            .or_else(|| {
                self.records
                    .iter()
                    .find(|d| matches_raw_fields(d.original_data.as_ref(), &query))
            })
    }

    pub fn critical(&self) -> Vec<&DrugRecord> {
        self.records.iter().filter(|d| d.critical).collect()
    }

    pub fn by_condition(&self, condition: &str) -> Vec<&DrugRecord> {
        self.records
            .iter()
            .filter(|d| d.has_condition(condition))
            .collect()
    }
}

fn matches_raw_fields(raw: Option<&RawDrugRecord>, query: &str) -> bool {
    let Some(raw) = raw else {
        return false;
    };

    let in_field = |key: &str| raw.str_field(key).to_lowercase().contains(query);
    in_field(RawDrugRecord::PRODUCT_NAME)
        || in_field(RawDrugRecord::SALT_COMPOSITION)
        || raw
            .list_field(RawDrugRecord::USES)
            .unwrap_or_default()
            .iter()
            .any(|u| u.to_lowercase().contains(query))
}
