//! ElevenLabs TTS provider (`/v1/text-to-speech/{voice_id}`).

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::http::{shared_client, status_to_error, trim_trailing_slash, xi_api_key_headers};
use super::{SpeechSynthesizer, Voice};
use crate::config::NarratorConfig;
use crate::error::NarratorError;
use crate::util::retry::RetryPolicy;
use crate::util::timeout::maybe_timeout;

/// Voice-quality knobs sent with every synthesis request.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(serde::Deserialize)]
struct VoicesResponse {
    voices: Vec<Voice>,
}

/// ElevenLabs speech synthesis client.
///
/// Retry and timeout are both off by default: a failed or hung request
/// affects only the entry that issued it.
#[derive(Debug, Clone)]
pub struct ElevenLabsSynthesizer {
    api_key: String,
    base_url: String,
    voice_id: String,
    model_id: String,
    voice_settings: VoiceSettings,
    timeout: Option<Duration>,
    retry_policy: RetryPolicy,
}

impl ElevenLabsSynthesizer {
    pub fn new(api_key: String, voice_id: String) -> Self {
        Self {
            api_key,
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            voice_id,
            model_id: crate::config::DEFAULT_MODEL_ID.to_string(),
            voice_settings: VoiceSettings {
                stability: crate::config::DEFAULT_STABILITY,
                similarity_boost: crate::config::DEFAULT_SIMILARITY_BOOST,
            },
            timeout: None,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn new_with_base_url(
        api_key: String,
        voice_id: String,
        base_url: impl Into<String>,
    ) -> Self {
        let mut synthesizer = Self::new(api_key, voice_id);
        synthesizer.base_url = base_url.into();
        synthesizer
    }

    /// Build a provider from batch configuration.
    pub fn from_config(config: &NarratorConfig) -> Self {
        Self::new_with_base_url(
            config.api_key.clone(),
            config.voice_id.clone(),
            config.base_url.clone(),
        )
        .with_model(config.model_id.clone())
        .with_voice_settings(config.stability, config.similarity_boost)
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_voice_settings(mut self, stability: f32, similarity_boost: f32) -> Self {
        self.voice_settings = VoiceSettings {
            stability,
            similarity_boost,
        };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// List the voices available to this API key (`GET /v1/voices`).
    ///
    /// Any non-success response is treated as "no voices available".
    pub async fn list_voices(&self) -> Result<Vec<Voice>, NarratorError> {
        let url = format!("{}/v1/voices", trim_trailing_slash(&self.base_url));
        let response = shared_client()
            .get(url)
            .headers(xi_api_key_headers(&self.api_key))
            .send()
            .await?;

        if response.status().as_u16() != 200 {
            tracing::warn!(status = response.status().as_u16(), "Voice listing failed");
            return Ok(Vec::new());
        }

        let parsed: VoicesResponse = response.json().await?;
        Ok(parsed.voices)
    }

    fn validate(&self, text: &str) -> Result<(), NarratorError> {
        if self.api_key.trim().is_empty() {
            return Err(NarratorError::Authentication(
                "Missing ElevenLabs API key".to_string(),
            ));
        }
        if self.voice_id.trim().is_empty() {
            return Err(NarratorError::InvalidArgument(
                "Voice id cannot be empty".to_string(),
            ));
        }
        if text.trim().is_empty() {
            return Err(NarratorError::InvalidArgument(
                "Narration text cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    async fn synthesize_once(&self, text: &str) -> Result<Vec<u8>, NarratorError> {
        let payload = SynthesisRequest {
            text,
            model_id: &self.model_id,
            voice_settings: self.voice_settings,
        };
        let url = format!(
            "{}/v1/text-to-speech/{}",
            trim_trailing_slash(&self.base_url),
            self.voice_id
        );

        maybe_timeout(self.timeout, async {
            let response = shared_client()
                .post(url)
                .headers(xi_api_key_headers(&self.api_key))
                .json(&payload)
                .send()
                .await?;

            parse_audio_response(response).await
        })
        .await
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, NarratorError> {
        self.validate(text)?;
        self.retry_policy
            .execute(|| self.synthesize_once(text))
            .await
    }
}

async fn parse_audio_response(response: reqwest::Response) -> Result<Vec<u8>, NarratorError> {
    let status = response.status().as_u16();
    if status != 200 {
        let body = response.text().await.unwrap_or_default();
        let message = extract_detail_message(&body).unwrap_or(body);
        return Err(status_to_error(status, &message));
    }

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(NarratorError::InvalidState(
            "Speech response contained empty audio payload".to_string(),
        ));
    }

    Ok(bytes.to_vec())
}

/// ElevenLabs error bodies look like `{"detail": {"status": .., "message": ..}}`.
fn extract_detail_message(body: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = parsed.get("detail")?;
    if let Some(message) = detail.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }
    detail.as_str().map(ToString::to_string)
}
