use crate::domain::{DrugRecord, SkipDoseReport};

const UNKNOWN_CATEGORY: &str = "Unknown";
const UNKNOWN_RISK: &str = "Unknown risk";
const NO_CONDITIONS: &str = "no specific conditions";

/// Prompt asking the generation model to grade the risk of skipped doses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAnalysisPrompt {
    pub patient_age: u32,
    pub conditions: Vec<String>,
    pub drug_name: String,
    pub drug_category: String,
    pub skips: u32,
    pub risk_info: String,
}

impl RiskAnalysisPrompt {
    pub fn from_report(report: &SkipDoseReport, drug: Option<&DrugRecord>) -> Self {
        Self {
            patient_age: report.patient_age,
            conditions: report.conditions.clone(),
            drug_name: report.drug_name.clone(),
            drug_category: drug
                .map(|d| d.category.clone())
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            skips: report.skips,
            risk_info: drug
                .map(|d| d.risk_if_skipped.clone())
                .unwrap_or_else(|| UNKNOWN_RISK.to_string()),
        }
    }

    pub fn format(&self) -> String {
        let conditions = if self.conditions.is_empty() {
            NO_CONDITIONS.to_string()
        } else {
            self.conditions.join(", ")
        };

        format!(
            "You are a medical AI assistant. Analyze the risk of a patient skipping their medication.

Patient Information:
- Age: {age} years
- Medical Conditions: {conditions}
- Medication: {drug} ({category})
- Number of skipped doses: {skips}
- Known risk if skipped: {risk}

Please provide:
1. Risk Level: \"Low\", \"Medium\", or \"High\"
2. A brief message explaining the immediate concern
3. A detailed AI explanation of what could happen

Format your response as:
RISK_LEVEL: [Low/Medium/High]
MESSAGE: [brief message]
EXPLANATION: [detailed explanation]",
            age = self.patient_age,
            conditions = conditions,
            drug = self.drug_name,
            category = self.drug_category,
            skips = self.skips,
            risk = self.risk_info,
        )
    }
}
