use std::collections::HashMap;

use async_trait::async_trait;
use narrator::config::NarratorConfig;
use narrator::error::NarratorError;
use narrator::script::{narration_script, NarrationLine};
use narrator::synth::BatchSynthesizer;
use narrator::tts::SpeechSynthesizer;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Synthesizer that answers every request with bytes derived from the text.
struct AlwaysOk;

#[async_trait]
impl SpeechSynthesizer for AlwaysOk {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, NarratorError> {
        Ok(format!("audio:{text}").into_bytes())
    }
}

/// Synthesizer with a scripted per-text outcome.
struct Scripted {
    by_text: HashMap<&'static str, Result<&'static [u8], (u16, &'static str)>>,
}

#[async_trait]
impl SpeechSynthesizer for Scripted {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, NarratorError> {
        match self.by_text.get(text) {
            Some(Ok(bytes)) => Ok(bytes.to_vec()),
            Some(Err((status, message))) => Err(NarratorError::api(*status, *message)),
            None => Err(NarratorError::InvalidState(format!(
                "unexpected text: {text}"
            ))),
        }
    }
}

fn config_in(dir: &TempDir) -> NarratorConfig {
    NarratorConfig::new("test-key").with_output_dir(dir.path().join("audio"))
}

const TWO_LINE_SCRIPT: &[NarrationLine] = &[
    NarrationLine {
        key: "a",
        text: "Hello",
    },
    NarrationLine {
        key: "b",
        text: "World",
    },
];

#[tokio::test]
async fn run_produces_one_file_per_key() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let batch = BatchSynthesizer::new(&config, Box::new(AlwaysOk));

    let summary = batch.run(narration_script()).await.unwrap();

    assert_eq!(summary.generated, narration_script().len());
    assert!(summary.failed.is_empty());
    for line in narration_script() {
        let path = config.output_dir.join(format!("{}.mp3", line.key));
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, format!("audio:{}", line.text).into_bytes());
    }
}

#[tokio::test]
async fn failed_entries_leave_no_file_and_do_not_stop_the_batch() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let mock = Scripted {
        by_text: HashMap::from([
            ("Hello", Ok(b"AUDIO_A".as_slice())),
            ("World", Err((500, "server error"))),
        ]),
    };
    let batch = BatchSynthesizer::new(&config, Box::new(mock));

    let summary = batch.run(TWO_LINE_SCRIPT).await.unwrap();

    assert_eq!(summary.generated, 1);
    assert_eq!(summary.failed, vec!["b".to_string()]);

    let a = std::fs::read(config.output_dir.join("a.mp3")).unwrap();
    assert_eq!(a, b"AUDIO_A".to_vec());
    assert!(!config.output_dir.join("b.mp3").exists());
}

#[tokio::test]
async fn empty_script_creates_directory_and_no_files() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let batch = BatchSynthesizer::new(&config, Box::new(AlwaysOk));

    let summary = batch.run(&[]).await.unwrap();

    assert_eq!(summary.generated, 0);
    assert!(summary.failed.is_empty());
    assert!(config.output_dir.is_dir());
    assert_eq!(std::fs::read_dir(&config.output_dir).unwrap().count(), 0);
}

#[tokio::test]
async fn ensure_output_dir_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let batch = BatchSynthesizer::new(&config, Box::new(AlwaysOk));

    batch.ensure_output_dir().await.unwrap();
    batch.ensure_output_dir().await.unwrap();

    assert!(config.output_dir.is_dir());
}

#[tokio::test]
async fn write_audio_overwrites_existing_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.mp3");

    BatchSynthesizer::write_audio(b"old", &path).await.unwrap();
    BatchSynthesizer::write_audio(b"new bytes", &path)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"new bytes".to_vec());
}

#[tokio::test]
async fn rerun_overwrites_previous_output() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let batch = BatchSynthesizer::new(&config, Box::new(AlwaysOk));

    batch.run(TWO_LINE_SCRIPT).await.unwrap();
    let summary = batch.run(TWO_LINE_SCRIPT).await.unwrap();

    assert_eq!(summary.generated, 2);
    let a = std::fs::read(config.output_dir.join("a.mp3")).unwrap();
    assert_eq!(a, b"audio:Hello".to_vec());
}

#[tokio::test]
async fn unwritable_output_dir_is_fatal() {
    let dir = TempDir::new().unwrap();
    // A file where the directory should go makes create_dir_all fail.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let config = NarratorConfig::new("test-key").with_output_dir(blocker.join("audio"));
    let batch = BatchSynthesizer::new(&config, Box::new(AlwaysOk));

    let err = batch.run(TWO_LINE_SCRIPT).await.expect_err("must be fatal");
    assert!(matches!(err, NarratorError::Io(_)));
    assert!(!blocker.join("audio").exists());
}
