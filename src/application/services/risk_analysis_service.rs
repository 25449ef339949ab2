use std::sync::Arc;

use crate::application::ports::{Embedder, LlmClient};
use crate::domain::{
    DrugRecord, Embedding, RiskAnalysis, RiskAssessment, RiskLevel, SkipDoseReport,
};
use crate::infrastructure::observability::sanitize_prompt;

use super::drug_catalog::DrugCatalog;
use super::risk_prompt::RiskAnalysisPrompt;

pub const DEFAULT_MESSAGE: &str = "Please consult your doctor about missed doses.";
const SIMILAR_DRUGS_TOP_K: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum RiskAnalysisError {
    #[error("Drug '{0}' not found in dataset")]
    DrugNotFound(String),
}

pub struct RiskAnalysisService {
    llm_client: Arc<dyn LlmClient>,
    embedder: Arc<dyn Embedder>,
    catalog: Arc<DrugCatalog>,
}

impl RiskAnalysisService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        embedder: Arc<dyn Embedder>,
        catalog: Arc<DrugCatalog>,
    ) -> Self {
        Self {
            llm_client,
            embedder,
            catalog,
        }
    }

    #[tracing::instrument(skip(self, report), fields(drug = %report.drug_name, skips = report.skips))]
    pub async fn analyze(&self, report: &SkipDoseReport) -> Result<RiskAnalysis, RiskAnalysisError> {
        let drug = self
            .catalog
            .lookup(&report.drug_name)
            .ok_or_else(|| RiskAnalysisError::DrugNotFound(report.drug_name.clone()))?;

        let prompt = RiskAnalysisPrompt::from_report(report, Some(drug)).format();
        tracing::debug!(prompt = %sanitize_prompt(&prompt), "Requesting risk assessment");

        let assessment = match self.llm_client.generate(&prompt).await {
            Ok(response) => parse_assessment(&response, drug, report.skips),
            Err(e) => {
                tracing::warn!(error = %e, "Risk generation failed, using fallback assessment");
                fallback_assessment(&report.drug_name, report.skips)
            }
        };

        let similar_drugs = self.similar_drugs(&report.drug_name).await;

        tracing::info!(
            risk_level = %assessment.risk_level,
            similar = similar_drugs.len(),
            "Risk analysis completed"
        );

        Ok(RiskAnalysis {
            assessment,
            similar_drugs,
        })
    }

    /// Names of the catalog entries closest to `drug_name` in embedding space.
    pub async fn similar_drugs(&self, drug_name: &str) -> Vec<String> {
        let query = self
            .embed_or_zero(&format!("medication drug {}", drug_name))
            .await;

        let mut scored: Vec<(&str, f32)> = Vec::with_capacity(self.catalog.len());
        for drug in self.catalog.records() {
            let embedding = self
                .embed_or_zero(&format!("medication drug {} {}", drug.name, drug.category))
                .await;
            scored.push((drug.name.as_str(), query.cosine_similarity(&embedding)));
        }

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
            .into_iter()
            .take(SIMILAR_DRUGS_TOP_K)
            .filter(|(name, _)| *name != drug_name)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// An unavailable embedder yields the zero vector, which scores 0 against everything.
    async fn embed_or_zero(&self, text: &str) -> Embedding {
        match self.embedder.embed(text).await {
            Ok(embedding) => embedding,
            Err(e) => {
                tracing::debug!(error = %e, "Embedding unavailable, using zero vector");
                Embedding::zeroed(self.embedder.dimensions())
            }
        }
    }
}

/// Extracts the labeled fields from model output, then applies the criticality adjustments.
pub fn parse_assessment(response: &str, drug: &DrugRecord, skips: u32) -> RiskAssessment {
    let mut risk_level = RiskLevel::Medium;
    let mut message = DEFAULT_MESSAGE.to_string();
    let mut explanation = response.to_string();

    for line in response.lines() {
        if let Some((_, rest)) = line.split_once("RISK_LEVEL:") {
            risk_level = RiskLevel::from_model_text(rest.trim());
        } else if let Some((_, rest)) = line.split_once("MESSAGE:") {
            message = rest.trim().to_string();
        } else if let Some((_, rest)) = line.split_once("EXPLANATION:") {
            explanation = rest.trim().to_string();
        }
    }

    if drug.critical {
        if risk_level == RiskLevel::Low {
            risk_level = RiskLevel::Medium;
        }
        if skips >= 2 {
            risk_level = RiskLevel::High;
        }
    }

    if message.is_empty() {
        message = DEFAULT_MESSAGE.to_string();
    }
    if explanation.is_empty() {
        explanation = response.to_string();
    }

    RiskAssessment {
        risk_level,
        message,
        ai_explanation: explanation,
    }
}

/// Assessment returned when the generation backend cannot be reached.
pub fn fallback_assessment(drug_name: &str, skips: u32) -> RiskAssessment {
    RiskAssessment {
        risk_level: RiskLevel::Medium,
        message: "Unable to analyze risk. Please consult your doctor immediately.".to_string(),
        ai_explanation: format!(
            "Skipping {} {} time(s) may have health implications. Please contact your healthcare provider.",
            drug_name, skips
        ),
    }
}
