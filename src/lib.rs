//! narrator — batch text-to-speech for Werewolf night narration.
//!
//! Converts the fixed narrator script of a social-deduction party game
//! into MP3 files by calling the ElevenLabs TTS API, one file per
//! narration key.
//!
//! # Quick Start
//!
//! ```no_run
//! use narrator::config::NarratorConfig;
//! use narrator::synth::BatchSynthesizer;
//! use narrator::tts::ElevenLabsSynthesizer;
//!
//! # async fn example() -> narrator::error::Result<()> {
//! let config = NarratorConfig::from_env();
//! let tts = ElevenLabsSynthesizer::from_config(&config);
//! let batch = BatchSynthesizer::new(&config, Box::new(tts));
//! let summary = batch.run(narrator::script::narration_script()).await?;
//! println!("{} files generated", summary.generated);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod script;
pub mod synth;
pub mod tts;
pub mod util;
