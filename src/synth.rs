//! Batch narration synthesizer.
//!
//! Drives the one-shot conversion of the narration table into files:
//! one synthesis call and one `<key>.mp3` per entry, strictly in table
//! order, with per-entry failures logged and skipped.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::config::NarratorConfig;
use crate::error::Result;
use crate::script::NarrationLine;
use crate::tts::SpeechSynthesizer;

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of files written.
    pub generated: usize,
    /// Keys whose entries failed (synthesis or write).
    pub failed: Vec<String>,
}

pub struct BatchSynthesizer {
    output_dir: PathBuf,
    synthesizer: Box<dyn SpeechSynthesizer>,
}

impl BatchSynthesizer {
    pub fn new(config: &NarratorConfig, synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            synthesizer,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory (and parents) if absent. Idempotent.
    pub async fn ensure_output_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        Ok(())
    }

    /// Write audio bytes to `path`, replacing any existing file.
    pub async fn write_audio(bytes: &[u8], path: &Path) -> Result<()> {
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    /// Run the batch over `script` in table order.
    ///
    /// Directory creation failure is fatal and aborts before any
    /// network call. Everything after that is per-entry: a failed
    /// entry is logged and skipped, the batch continues. Calls are
    /// fully sequential.
    pub async fn run(&self, script: &[NarrationLine]) -> Result<BatchSummary> {
        if let Err(e) = self.ensure_output_dir().await {
            error!(
                dir = %self.output_dir.display(),
                error = %e,
                "Cannot create output directory"
            );
            return Err(e);
        }

        let mut summary = BatchSummary::default();
        for line in script {
            let path = self.output_dir.join(format!("{}.mp3", line.key));
            info!(key = line.key, "Generating narration");

            let bytes = match self.synthesizer.synthesize(line.text).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(key = line.key, error = %e, "Synthesis failed");
                    summary.failed.push(line.key.to_string());
                    continue;
                }
            };

            match Self::write_audio(&bytes, &path).await {
                Ok(()) => {
                    info!(path = %path.display(), "Saved");
                    summary.generated += 1;
                }
                Err(e) => {
                    warn!(key = line.key, error = %e, "Failed to write audio file");
                    summary.failed.push(line.key.to_string());
                }
            }
        }

        info!(
            generated = summary.generated,
            failed = summary.failed.len(),
            "Narration batch complete"
        );
        Ok(summary)
    }
}
