//! Text-to-speech provider surface.

pub mod elevenlabs;
pub mod http;

pub use elevenlabs::{ElevenLabsSynthesizer, VoiceSettings};

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::NarratorError;

/// Trait for text-to-speech backends.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Generate speech audio for one narration line.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, NarratorError>;
}

/// One voice descriptor from the provider's catalogue.
#[derive(Debug, Clone, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    #[serde(default)]
    pub name: Option<String>,
}
