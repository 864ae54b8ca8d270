//! Renders every keyboard note with each waveform into WAV files.
//!
//! Usage: cargo run --example render_wav --features wav -- [output-dir]

use anyhow::{Context, Result};
use keysynth::music::NOTE_FREQUENCIES;
use keysynth::{NoteConfig, Shape, Synth, WavSink};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("rendered"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for shape in Shape::ALL {
        let sink = WavSink::new(&out_dir).with_prefix(shape.label().to_lowercase());
        let mut synth = Synth::new(sink);
        let config = NoteConfig::default().with_shape(shape);

        for (name, _) in NOTE_FREQUENCIES {
            synth
                .play_note(&config, name)
                .with_context(|| format!("rendering {shape} {name}"))?;
        }
        info!(
            "Wrote {} {} notes to {}",
            synth.sink().written().len(),
            shape,
            out_dir.display()
        );
    }
    Ok(())
}
