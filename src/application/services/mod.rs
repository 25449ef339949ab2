mod drug_catalog;
pub mod drug_normalizer;
mod language_router;
mod risk_analysis_service;
mod risk_prompt;
mod synthesis_service;
mod transcription_service;
mod translation_service;

pub use drug_catalog::DrugCatalog;
pub use drug_normalizer::normalize;
pub use language_router::{LanguageRoute, LanguageRouter};
pub use risk_analysis_service::{
    RiskAnalysisError, RiskAnalysisService, fallback_assessment, parse_assessment,
};
pub use risk_prompt::RiskAnalysisPrompt;
pub use synthesis_service::{SynthesisError, SynthesisService};
pub use transcription_service::{TranscriptionError, TranscriptionService};
pub use translation_service::TranslationService;
