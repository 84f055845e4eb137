//! Narrator binary entry point.

use narrator::config::NarratorConfig;
use narrator::script::narration_script;
use narrator::synth::BatchSynthesizer;
use narrator::tts::ElevenLabsSynthesizer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("narrator=info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> narrator::error::Result<()> {
    let config = NarratorConfig::from_env();
    let tts = ElevenLabsSynthesizer::from_config(&config);

    // Best effort: resolve the configured voice id to a display name.
    let voice_name = tts
        .list_voices()
        .await
        .unwrap_or_default()
        .into_iter()
        .find(|v| v.voice_id == config.voice_id)
        .and_then(|v| v.name);
    match voice_name {
        Some(name) => tracing::info!(voice = %name, id = %config.voice_id, "Using voice"),
        None => tracing::info!(id = %config.voice_id, "Using voice"),
    }

    let batch = BatchSynthesizer::new(&config, Box::new(tts));
    let summary = batch.run(narration_script()).await?;

    println!(
        "Done! {} audio files saved in {}/ ({} failed)",
        summary.generated,
        config.output_dir.display(),
        summary.failed.len()
    );
    Ok(())
}
