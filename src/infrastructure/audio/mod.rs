pub mod audio_decoder;
mod backend_factory;
mod candle_whisper_model;
mod cloud_stt_backend;
mod in_process_backend;
mod whisper_api_backend;

pub use backend_factory::TranscriptionBackendFactory;
pub use candle_whisper_model::{CandleWhisperModel, detokenize};
pub use cloud_stt_backend::CloudSttBackend;
pub use in_process_backend::InProcessBackend;
pub use whisper_api_backend::WhisperApiBackend;
