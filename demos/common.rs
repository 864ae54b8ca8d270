//! Terminal plumbing shared by the interactive demos.

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;
use std::panic;
use std::time::Duration;

/// Key handling result that controls the event loop
pub enum KeyAction {
    /// Continue the event loop
    Continue,
    /// Exit the event loop
    Exit,
}

/// Runs an interactive terminal loop over some UI state.
///
/// This function handles all the boilerplate:
/// - Terminal raw mode and alternate screen
/// - Panic hook for terminal cleanup
/// - Event loop with key polling
///
/// `draw` is called once up front and again after every handled key press.
pub fn run_interactive<S, F, K>(state: &mut S, draw: F, mut key_handler: K) -> Result<()>
where
    F: Fn(&S) -> Result<()>,
    K: FnMut(&mut S, &KeyEvent) -> Result<KeyAction>,
{
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    let result = event_loop(state, draw, &mut key_handler);
    cleanup_terminal();
    result
}

fn event_loop<S, F, K>(state: &mut S, draw: F, key_handler: &mut K) -> Result<()>
where
    F: Fn(&S) -> Result<()>,
    K: FnMut(&mut S, &KeyEvent) -> Result<KeyAction>,
{
    draw(state)?;
    loop {
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            match key_handler(state, &key_event)? {
                KeyAction::Continue => draw(state)?,
                KeyAction::Exit => return Ok(()),
            }
        }
    }
}

/// Cleans up terminal state (cursor, alternate screen, raw mode).
fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Helper to check if a key code is a quit key (Q, ESC).
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
