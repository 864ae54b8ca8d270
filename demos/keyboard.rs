//! Interactive keyboard synthesizer.
//!
//! Keys 1-8 play C4 through C5 with the current waveform and envelope.
//! W cycles the waveform. a/A, d/D, s/S and r/R lower/raise attack, decay,
//! sustain and release; changing a parameter replays the last note.
//! SPACE stops playback. Press Q or ESC to quit.

mod common;

use anyhow::Result;
use common::{KeyAction, is_quit_key, run_interactive};
use crossterm::{ExecutableCommand, event::KeyCode};
use keysynth::music::NOTE_FREQUENCIES;
use keysynth::{CpalSink, NoteConfig, Synth};
use std::io::{Write, stdout};
use tracing_subscriber::EnvFilter;

const TIME_STEP: f64 = 0.05;
const LEVEL_STEP: f64 = 0.05;

/// Everything the UI owns: current controls, the last note, and the synth.
struct KeyboardContext {
    synth: Synth<CpalSink>,
    config: NoteConfig,
    last_note: Option<&'static str>,
    status: String,
}

impl KeyboardContext {
    fn new(synth: Synth<CpalSink>) -> Self {
        Self {
            synth,
            config: NoteConfig::default(),
            last_note: None,
            status: "ready".to_string(),
        }
    }

    fn play(&mut self, note: &'static str) {
        self.last_note = Some(note);
        self.status = match self.synth.play_note(&self.config, note) {
            Ok(()) => format!("playing {note}"),
            Err(err) => format!("error: {err}"),
        };
    }

    fn replay(&mut self) {
        if let Some(note) = self.last_note {
            self.play(note);
        }
    }

    fn adjust(&mut self, code: KeyCode) {
        let envelope = &mut self.config.envelope;
        match code {
            KeyCode::Char('a') => envelope.attack = (envelope.attack - TIME_STEP).max(0.0),
            KeyCode::Char('A') => envelope.attack += TIME_STEP,
            KeyCode::Char('d') => envelope.decay = (envelope.decay - TIME_STEP).max(0.0),
            KeyCode::Char('D') => envelope.decay += TIME_STEP,
            KeyCode::Char('s') => envelope.sustain = (envelope.sustain - LEVEL_STEP).max(0.0),
            KeyCode::Char('S') => envelope.sustain = (envelope.sustain + LEVEL_STEP).min(1.0),
            KeyCode::Char('r') => envelope.release = (envelope.release - TIME_STEP).max(0.0),
            KeyCode::Char('R') => envelope.release += TIME_STEP,
            KeyCode::Char('w') | KeyCode::Char('W') => self.config.shape = self.config.shape.next(),
            _ => return,
        }
        self.replay();
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '1'..='8') => {
                let index = c as usize - '1' as usize;
                self.play(NOTE_FREQUENCIES[index].0);
            }
            KeyCode::Char(' ') => {
                self.synth.stop();
                self.status = "stopped".to_string();
            }
            other => self.adjust(other),
        }
    }
}

fn draw_ui(ctx: &KeyboardContext) -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(crossterm::terminal::Clear(
        crossterm::terminal::ClearType::All,
    ))?;
    stdout.execute(crossterm::cursor::MoveTo(0, 0))?;

    let envelope = ctx.config.envelope;
    let keys: Vec<String> = NOTE_FREQUENCIES
        .iter()
        .enumerate()
        .map(|(i, (name, _))| format!("{}={}", i + 1, name))
        .collect();
    write!(stdout, "Keys: {}\r\n", keys.join("  "))?;
    write!(
        stdout,
        "Wave: {:<8} (W)  A {:.2}s  D {:.2}s  S {:.2}  R {:.2}s\r\n",
        ctx.config.shape, envelope.attack, envelope.decay, envelope.sustain, envelope.release
    )?;
    write!(stdout, "SPACE=stop  Q=quit  | {}\r\n", ctx.status)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = KeyboardContext::new(Synth::new(CpalSink::new()?));

    run_interactive(&mut ctx, draw_ui, |ctx, key_event| {
        if is_quit_key(key_event.code) {
            return Ok(KeyAction::Exit);
        }
        ctx.handle_key(key_event.code);
        Ok(KeyAction::Continue)
    })?;

    ctx.synth.stop();
    println!("\nGoodbye!");
    Ok(())
}
