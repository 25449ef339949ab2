use std::sync::Arc;

use crate::application::services::{
    DrugCatalog, RiskAnalysisService, SynthesisService, TranscriptionService, TranslationService,
};

/// Services built once at startup and shared by every request.
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub translation_service: Arc<TranslationService>,
    pub synthesis_service: Arc<SynthesisService>,
    pub risk_analysis_service: Arc<RiskAnalysisService>,
    pub drug_catalog: Arc<DrugCatalog>,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            translation_service: Arc::clone(&self.translation_service),
            synthesis_service: Arc::clone(&self.synthesis_service),
            risk_analysis_service: Arc::clone(&self.risk_analysis_service),
            drug_catalog: Arc::clone(&self.drug_catalog),
        }
    }
}
