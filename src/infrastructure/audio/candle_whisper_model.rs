use candle_core::{Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::whisper::{self as m, Config};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;

use crate::application::ports::{SpeechModel, SpeechModelError};
use crate::domain::DecodingMode;

const MEL_FILTERS_REPO: &str = "FL33TW00D-HF/whisper-base";
const MAX_DECODE_TOKENS: usize = 224;

/// Multilingual Whisper running on candle, used as the in-process regional model.
///
/// Whisper decodes autoregressively, so the decoding mode has no effect here.
pub struct CandleWhisperModel {
    model_id: String,
    model: m::model::Whisper,
    tokenizer: Tokenizer,
    config: Config,
    device: Device,
    mel_filters: Vec<f32>,
}

impl CandleWhisperModel {
    pub fn load(model_id: &str, use_gpu: bool) -> Result<Self, SpeechModelError> {
        let device = select_device(use_gpu);

        tracing::info!(device = ?device, model = model_id, "Loading in-process speech model");

        let api = Api::new().map_err(|e| SpeechModelError::LoadFailed(e.to_string()))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let fetch = |repo: &hf_hub::api::sync::ApiRepo, file: &str| {
            repo.get(file)
                .map_err(|e| SpeechModelError::LoadFailed(format!("{}: {}", file, e)))
        };

        let config_path = fetch(&repo, "config.json")?;
        let tokenizer_path = fetch(&repo, "tokenizer.json")?;
        let weights_path = fetch(&repo, "model.safetensors")?;

        let mel_repo = api.repo(Repo::new(MEL_FILTERS_REPO.to_string(), RepoType::Model));
        let mel_bytes_path = fetch(&mel_repo, "melfilters.bytes")?;

        let config_contents = std::fs::read_to_string(&config_path)
            .map_err(|e| SpeechModelError::LoadFailed(format!("read config: {}", e)))?;
        let config: Config = serde_json::from_str(&config_contents)
            .map_err(|e| SpeechModelError::LoadFailed(format!("parse config: {}", e)))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| SpeechModelError::LoadFailed(format!("tokenizer: {}", e)))?;

        let mel_bytes = std::fs::read(&mel_bytes_path)
            .map_err(|e| SpeechModelError::LoadFailed(format!("mel filters: {}", e)))?;
        let mel_filters = read_mel_filters(&mel_bytes, &config)?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], m::DTYPE, &device)
                .map_err(|e| SpeechModelError::LoadFailed(format!("weights: {}", e)))?
        };

        let model = m::model::Whisper::load(&vb, config.clone())
            .map_err(|e| SpeechModelError::LoadFailed(format!("model: {}", e)))?;

        tracing::info!(model = model_id, "In-process speech model loaded");

        Ok(Self {
            model_id: model_id.to_string(),
            model,
            tokenizer,
            config,
            device,
            mel_filters,
        })
    }

    fn mel_segments(&self, pcm: &[f32]) -> Result<Vec<Tensor>, SpeechModelError> {
        let n_mel = self.config.num_mel_bins;
        pcm.chunks(m::N_SAMPLES)
            .map(|chunk| {
                let mut samples = chunk.to_vec();
                samples.resize(m::N_SAMPLES, 0.0);

                let mel_data = m::audio::pcm_to_mel(&self.config, &samples, &self.mel_filters);
                let n_frames = mel_data.len() / n_mel;
                Tensor::from_vec(mel_data, (1, n_mel, n_frames), &self.device)
                    .map_err(|e| inference(format!("mel tensor: {}", e)))
            })
            .collect()
    }
}

impl SpeechModel for CandleWhisperModel {
    fn name(&self) -> &str {
        &self.model_id
    }

    fn transcribe_pcm(
        &mut self,
        pcm: &[f32],
        language: &str,
        _decoding: DecodingMode,
    ) -> Result<String, SpeechModelError> {
        let language_token = self
            .tokenizer
            .token_to_id(&format!("<|{}|>", language));
        if language_token.is_none() {
            tracing::debug!(language, "Model has no token for language, letting it detect");
        }

        let mut segments: Vec<String> = Vec::new();
        for (i, mel) in self.mel_segments(pcm)?.into_iter().enumerate() {
            tracing::debug!(segment = i, "Transcribing audio segment");
            let text = decode_segment(
                &mut self.model,
                &self.tokenizer,
                &self.device,
                &mel,
                language_token,
            )?;
            if !text.is_empty() {
                segments.push(text);
            }
        }

        Ok(segments.join(" "))
    }
}

fn select_device(use_gpu: bool) -> Device {
    if !use_gpu {
        return Device::Cpu;
    }
    match Device::cuda_if_available(0) {
        Ok(device) => device,
        Err(e) => {
            tracing::warn!(error = %e, "Accelerator unavailable, falling back to CPU");
            Device::Cpu
        }
    }
}

fn inference(msg: impl Into<String>) -> SpeechModelError {
    SpeechModelError::InferenceFailed(msg.into())
}

fn decode_segment(
    model: &mut m::model::Whisper,
    tokenizer: &Tokenizer,
    device: &Device,
    mel: &Tensor,
    language_token: Option<u32>,
) -> Result<String, SpeechModelError> {
    let sot_token = token_id(tokenizer, m::SOT_TOKEN)?;
    let transcribe_token = token_id(tokenizer, m::TRANSCRIBE_TOKEN)?;
    let no_timestamps_token = token_id(tokenizer, m::NO_TIMESTAMPS_TOKEN)?;
    let eot_token = token_id(tokenizer, m::EOT_TOKEN)?;

    let audio_features = model
        .encoder
        .forward(mel, true)
        .map_err(|e| inference(format!("encoder: {}", e)))?;

    let mut tokens = vec![sot_token];
    tokens.extend(language_token);
    tokens.push(transcribe_token);
    tokens.push(no_timestamps_token);
    let prompt_len = tokens.len();

    for _ in 0..MAX_DECODE_TOKENS {
        let token_tensor = Tensor::new(tokens.as_slice(), device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| inference(e.to_string()))?;

        let decoder_output = model
            .decoder
            .forward(&token_tensor, &audio_features, tokens.len() == prompt_len)
            .map_err(|e| inference(format!("decoder: {}", e)))?;

        let logits = decoder_output
            .squeeze(0)
            .and_then(|out| model.decoder.final_linear(&out))
            .map_err(|e| inference(format!("linear: {}", e)))?;

        let seq_len = logits.dim(0).map_err(|e| inference(e.to_string()))?;
        let next_token = logits
            .get(seq_len - 1)
            .and_then(|last| last.argmax(0))
            .and_then(|t| t.to_scalar::<u32>())
            .map_err(|e| inference(e.to_string()))?;

        if next_token == eot_token {
            break;
        }

        tokens.push(next_token);
    }

    model.reset_kv_cache();

    detokenize(tokenizer, &tokens[prompt_len..])
}

/// Turns generated ids back into text. The tokenizer is byte-level, so ids
/// must be decoded together to reassemble multi-byte scripts.
pub fn detokenize(tokenizer: &Tokenizer, ids: &[u32]) -> Result<String, SpeechModelError> {
    tokenizer
        .decode(ids, true)
        .map(|text| text.trim().to_string())
        .map_err(|e| inference(format!("detokenize: {}", e)))
}

fn token_id(tokenizer: &Tokenizer, token: &str) -> Result<u32, SpeechModelError> {
    tokenizer
        .token_to_id(token)
        .ok_or_else(|| inference(format!("token not found: {}", token)))
}

fn read_mel_filters(bytes: &[u8], config: &Config) -> Result<Vec<f32>, SpeechModelError> {
    let expected_len = config.num_mel_bins * (m::N_FFT / 2 + 1);
    if bytes.len() < expected_len * 4 {
        return Err(SpeechModelError::LoadFailed(format!(
            "mel filters file too small: {} bytes, expected at least {}",
            bytes.len(),
            expected_len * 4
        )));
    }

    Ok(bytes
        .chunks_exact(4)
        .take(expected_len)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
