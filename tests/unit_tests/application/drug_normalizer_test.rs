use medmentor::application::services::drug_normalizer::{infer_category, is_critical, normalize};
use medmentor::domain::RawDrugRecord;
use serde_json::{Value, json};

fn raw(value: Value) -> RawDrugRecord {
    RawDrugRecord::from_value(value).unwrap()
}

#[test]
fn given_product_name_when_normalizing_then_name_is_kept_verbatim() {
    let record = normalize(raw(json!({
        "product_name": "Glycomet 500mg Tablet",
        "salt_composition": "Metformin (500mg)"
    })))
    .unwrap();

    assert_eq!(record.name, "Glycomet 500mg Tablet");
    assert_eq!(record.dosage, "Metformin (500mg)");
}

#[test]
fn given_only_salt_composition_when_normalizing_then_name_is_text_before_parenthesis() {
    let record = normalize(raw(json!({"salt_composition": "DrugX (50mg)"}))).unwrap();

    assert_eq!(record.name, "DrugX");
}

#[test]
fn given_no_name_source_when_normalizing_then_entry_is_dropped() {
    assert!(normalize(raw(json!({"uses": ["Pain relief"]}))).is_none());
    assert!(normalize(raw(json!({"salt_composition": " (50mg)"}))).is_none());
}

#[test]
fn given_explicit_therapeutic_class_when_normalizing_then_category_uses_it() {
    let record = normalize(raw(json!({
        "product_name": "Ecosprin",
        "uses": ["Heart attack prevention"],
        "fact": {"Therapeutic Class": "BLOOD RELATED"}
    })))
    .unwrap();

    assert_eq!(record.category, "BLOOD RELATED");
    assert!(record.critical);
}

#[test]
fn given_conditions_when_inferring_category_then_first_matching_rule_wins() {
    let conditions = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(infer_category(&conditions(&["Type 2 diabetic control"])), "Antidiabetic");
    assert_eq!(infer_category(&conditions(&["Hypertension"])), "Cardiac");
    assert_eq!(infer_category(&conditions(&["High cholesterol"])), "Statin");
    assert_eq!(infer_category(&conditions(&["Fever"])), "General");
    assert_eq!(infer_category(&[]), "General");
}

#[test]
fn given_keyword_in_any_field_when_checking_criticality_then_critical() {
    assert!(is_critical("Warfarin 5mg", &[], ""));
    assert!(is_critical("Tab", &["Treatment of Hypertension".to_string()], ""));
    assert!(is_critical("Tab", &[], "Acts as an anticoagulant"));
    assert!(!is_critical("Paracetamol", &["Fever".to_string()], "Reduces pain"));
}

#[test]
fn given_side_effects_and_advice_when_normalizing_then_risk_text_combines_them() {
    let record = normalize(raw(json!({
        "product_name": "Lasix",
        "side_effect": ["Dizziness", "Dehydration", "Headache", "Nausea"],
        "Expert_advice": ["", "Take in the morning."]
    })))
    .unwrap();

    assert_eq!(
        record.risk_if_skipped,
        "Side effects: Dizziness, Dehydration, Headache. Take in the morning."
    );
}

#[test]
fn given_advice_as_string_when_normalizing_then_it_is_used() {
    let record = normalize(raw(json!({
        "product_name": "Lasix",
        "Expert_advice": "Monitor potassium."
    })))
    .unwrap();

    assert_eq!(record.risk_if_skipped, "Monitor potassium.");
}

#[test]
fn given_no_risk_fields_when_normalizing_then_risk_text_is_generic() {
    let record = normalize(raw(json!({"product_name": "Crocin"}))).unwrap();

    assert_eq!(record.risk_if_skipped, "Consult doctor if Crocin is skipped");
    assert!(!record.critical);
    assert!(record.conditions.is_empty());
}

#[test]
fn given_raw_entry_when_normalizing_then_original_data_is_retained() {
    let value = json!({"product_name": "Crocin", "extra": {"nested": 1}});
    let record = normalize(raw(value.clone())).unwrap();

    assert_eq!(
        serde_json::to_value(record.original_data.unwrap()).unwrap(),
        value
    );
}
