mod audio_file_name;
mod backend;
mod drug;
mod embedding;
pub mod language;
mod risk;
mod transcription;
pub mod translation;

pub use audio_file_name::AudioFileName;
pub use backend::{BackendDescriptor, BackendKind, LanguageSupport, ProtocolKind};
pub use drug::{DrugRecord, RawDrugRecord};
pub use embedding::Embedding;
pub use language::{AudioFormat, DecodingMode, LanguageClass};
pub use risk::{RiskAnalysis, RiskAssessment, RiskLevel, SkipDoseReport};
pub use transcription::{TranscriptionRequest, TranscriptionResult};
pub use translation::Translation;
