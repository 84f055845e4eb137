//! Runtime configuration for the narration batch.
//!
//! Everything the synthesizer needs is carried in one explicit value;
//! there are no ambient globals beyond the process environment it is
//! loaded from.

use std::path::PathBuf;

/// ElevenLabs API root.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Directory the MP3 files land in.
pub const DEFAULT_OUTPUT_DIR: &str = "audio";

/// "Arnold" — strong authoritative voice, suits a night narrator.
pub const DEFAULT_VOICE_ID: &str = "VR6AewLTigWG4xSOukaG";

pub const DEFAULT_MODEL_ID: &str = "eleven_turbo_v2";

pub const DEFAULT_STABILITY: f32 = 0.3;
pub const DEFAULT_SIMILARITY_BOOST: f32 = 0.8;

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct NarratorConfig {
    pub api_key: String,
    pub voice_id: String,
    pub model_id: String,
    pub base_url: String,
    pub output_dir: PathBuf,
    pub stability: f32,
    pub similarity_boost: f32,
}

impl NarratorConfig {
    /// Config with the given API key and built-in defaults for the rest.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            stability: DEFAULT_STABILITY,
            similarity_boost: DEFAULT_SIMILARITY_BOOST,
        }
    }

    /// Load from environment variables (and `.env` if present).
    ///
    /// `ELEVENLABS_API_KEY` supplies the key; `NARRATOR_VOICE_ID`,
    /// `ELEVENLABS_BASE_URL` and `NARRATOR_OUTPUT_DIR` override their
    /// defaults when set. A missing key is not an error here — the
    /// provider rejects requests without one.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new(std::env::var("ELEVENLABS_API_KEY").unwrap_or_default());

        if let Ok(voice_id) = std::env::var("NARRATOR_VOICE_ID") {
            config.voice_id = voice_id;
        }
        if let Ok(url) = std::env::var("ELEVENLABS_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(dir) = std::env::var("NARRATOR_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        config
    }

    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
