use crate::domain::{DrugRecord, RawDrugRecord};

pub const CRITICAL_KEYWORDS: [&str; 10] = [
    "heart failure",
    "heart attack",
    "stroke",
    "diabetes",
    "insulin",
    "warfarin",
    "anticoagulant",
    "arrhythmia",
    "angina",
    "hypertension",
];

/// Category inference rules, checked in order against lowercased conditions.
const CATEGORY_RULES: [(&[&str], &str); 3] = [
    (&["diabetic"], "Antidiabetic"),
    (&["heart", "cardiac", "hypertension"], "Cardiac"),
    (&["cholesterol", "lipid"], "Statin"),
];

const DEFAULT_CATEGORY: &str = "General";
const MAX_SIDE_EFFECTS: usize = 3;

/// Converts one raw dataset entry into a canonical record.
///
/// Returns `None` when no name can be derived; such entries are dropped from the dataset.
pub fn normalize(raw: RawDrugRecord) -> Option<DrugRecord> {
    let name = resolve_name(&raw)?;
    let conditions = raw.list_field(RawDrugRecord::USES).unwrap_or_default();
    let category = resolve_category(&raw, &conditions);
    let critical = is_critical(
        &name,
        &conditions,
        raw.str_field(RawDrugRecord::DRUG_WORKING),
    );
    let risk_if_skipped = risk_description(&raw, &name);
    let dosage = raw.str_field(RawDrugRecord::SALT_COMPOSITION).to_string();

    Some(DrugRecord {
        name,
        category,
        critical,
        conditions,
        risk_if_skipped,
        dosage,
        original_data: Some(raw),
    })
}

fn resolve_name(raw: &RawDrugRecord) -> Option<String> {
    let product_name = raw.str_field(RawDrugRecord::PRODUCT_NAME);
    if !product_name.is_empty() {
        return Some(product_name.to_string());
    }

    let salt = raw.str_field(RawDrugRecord::SALT_COMPOSITION);
    let parsed = salt.split('(').next().unwrap_or("").trim();
    (!parsed.is_empty()).then(|| parsed.to_string())
}

fn resolve_category(raw: &RawDrugRecord, conditions: &[String]) -> String {
    let explicit = raw.nested_str_field(RawDrugRecord::FACT, RawDrugRecord::THERAPEUTIC_CLASS);
    if !explicit.is_empty() {
        return explicit.to_string();
    }
    infer_category(conditions).to_string()
}

pub fn infer_category(conditions: &[String]) -> &'static str {
    let lowered: Vec<String> = conditions.iter().map(|c| c.to_lowercase()).collect();
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| {
            lowered
                .iter()
                .any(|c| keywords.iter().any(|k| c.contains(k)))
        })
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

pub fn is_critical(name: &str, conditions: &[String], mechanism: &str) -> bool {
    let haystacks = [
        conditions.join(" ").to_lowercase(),
        name.to_lowercase(),
        mechanism.to_lowercase(),
    ];
    CRITICAL_KEYWORDS
        .iter()
        .any(|keyword| haystacks.iter().any(|h| h.contains(keyword)))
}

fn risk_description(raw: &RawDrugRecord, name: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    let side_effects = raw.list_field(RawDrugRecord::SIDE_EFFECT).unwrap_or_default();
    if !side_effects.is_empty() {
        let listed: Vec<&str> = side_effects
            .iter()
            .take(MAX_SIDE_EFFECTS)
            .map(String::as_str)
            .collect();
        parts.push(format!("Side effects: {}.", listed.join(", ")));
    }

    if let Some(advice) = first_expert_advice(raw) {
        parts.push(advice);
    }

    if parts.is_empty() {
        format!("Consult doctor if {} is skipped", name)
    } else {
        parts.join(" ")
    }
}

fn first_expert_advice(raw: &RawDrugRecord) -> Option<String> {
    match raw.get(RawDrugRecord::EXPERT_ADVICE)? {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .find(|s| !s.is_empty())
            .map(str::to_string),
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
