use medmentor::application::services::RiskAnalysisPrompt;
use medmentor::domain::{DrugRecord, SkipDoseReport};

fn report(conditions: Vec<String>) -> SkipDoseReport {
    SkipDoseReport {
        drug_name: "Furosemide".to_string(),
        skips: 3,
        patient_age: 72,
        conditions,
    }
}

#[test]
fn given_catalog_entry_when_formatting_then_category_and_risk_are_included() {
    let drug = DrugRecord {
        name: "Furosemide".to_string(),
        category: "Diuretic".to_string(),
        critical: true,
        conditions: vec!["Heart Failure".to_string()],
        risk_if_skipped: "Fluid buildup".to_string(),
        dosage: "40mg".to_string(),
        original_data: None,
    };

    let prompt = RiskAnalysisPrompt::from_report(
        &report(vec!["Heart Failure".to_string(), "Edema".to_string()]),
        Some(&drug),
    )
    .format();

    assert!(prompt.contains("- Medical Conditions: Heart Failure, Edema"));
    assert!(prompt.contains("- Medication: Furosemide (Diuretic)"));
    assert!(prompt.contains("- Known risk if skipped: Fluid buildup"));
    assert!(prompt.ends_with("EXPLANATION: [detailed explanation]"));
}

#[test]
fn given_no_conditions_and_no_entry_when_formatting_then_placeholders_are_used() {
    let prompt = RiskAnalysisPrompt::from_report(&report(vec![]), None).format();

    assert!(prompt.contains("- Medical Conditions: no specific conditions"));
    assert!(prompt.contains("- Medication: Furosemide (Unknown)"));
    assert!(prompt.contains("- Known risk if skipped: Unknown risk"));
}
