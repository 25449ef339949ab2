use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical drug entry served to lookups and risk analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRecord {
    pub name: String,
    pub category: String,
    pub critical: bool,
    pub conditions: Vec<String>,
    pub risk_if_skipped: String,
    pub dosage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_data: Option<RawDrugRecord>,
}

impl DrugRecord {
    pub fn has_condition(&self, condition: &str) -> bool {
        let needle = condition.to_lowercase();
        self.conditions
            .iter()
            .any(|c| c.to_lowercase().contains(&needle))
    }
}

/// A dataset entry exactly as it appeared in the source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDrugRecord(Map<String, Value>);

impl RawDrugRecord {
    pub const PRODUCT_NAME: &'static str = "product_name";
    pub const SALT_COMPOSITION: &'static str = "salt_composition";
    pub const USES: &'static str = "uses";
    pub const FACT: &'static str = "fact";
    pub const THERAPEUTIC_CLASS: &'static str = "Therapeutic Class";
    pub const DRUG_WORKING: &'static str = "Drug_working";
    pub const SIDE_EFFECT: &'static str = "side_effect";
    pub const EXPERT_ADVICE: &'static str = "Expert_advice";

    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String field, or `""` when absent or not a string.
    pub fn str_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// String entries of a list field; `None` when the field is not a list.
    pub fn list_field(&self, key: &str) -> Option<Vec<String>> {
        let items = self.0.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn nested_str_field(&self, key: &str, nested: &str) -> &str {
        self.0
            .get(key)
            .and_then(|v| v.get(nested))
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}
