mod analyze;
mod drugs;
mod error_response;
mod health;
mod languages;
mod synthesize;
mod transcribe;
mod translate;

pub use analyze::analyze_skip_handler;
pub use drugs::{get_drug_handler, list_drugs_handler};
pub use error_response::ErrorResponse;
pub use health::{health_handler, root_handler};
pub use languages::languages_handler;
pub use synthesize::{audio_file_handler, synthesize_handler};
pub use transcribe::transcribe_handler;
pub use translate::translate_handler;
