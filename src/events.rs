//! Event handling functions for user input and animation ticks.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::App;

/// Longest time to block waiting for input, in milliseconds.
///
/// The loop wakes up earlier when the next solver step is due sooner than this.
pub(crate) const MAX_POLL_MS: u64 = 100;

/// Handles input events and advances the animation.
///
/// This function waits for a keyboard event until the next scheduled task of the maze cycle is
/// due, dispatches the key if one arrived, and then lets the cycle run whatever task has come due.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(poll_timeout(app, Instant::now()))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code, Instant::now());
            }
        }
    }

    let _ = app.cycle.tick(Instant::now());

    Ok(())
}

/// Computes how long to wait for input before the next scheduled task is due.
pub(crate) fn poll_timeout(app: &App, now: Instant) -> Duration {
    let max = Duration::from_millis(MAX_POLL_MS);

    app.cycle
        .next_due()
        .map_or(max, |due| due.saturating_duration_since(now).min(max))
}

/// Applies a key press to the application state.
///
/// - `q` or `Esc` quits.
/// - `r` throws the current maze away and starts a new cycle.
/// - `p` pauses or resumes the animation.
pub(crate) fn handle_key(app: &mut App, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('r') => app.cycle.reset(now),
        KeyCode::Char('p') => app.cycle.toggle_pause(now),
        _ => {}
    }
}
