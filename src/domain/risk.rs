use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Reads a level out of free model text; anything unclear is `Medium`.
    pub fn from_model_text(text: &str) -> Self {
        if text.contains("High") {
            Self::High
        } else if text.contains("Low") {
            Self::Low
        } else {
            Self::Medium
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A patient's report of skipped doses for one medication.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkipDoseReport {
    pub drug_name: String,
    pub skips: u32,
    pub patient_age: u32,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub message: String,
    pub ai_explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAnalysis {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub similar_drugs: Vec<String>,
}
