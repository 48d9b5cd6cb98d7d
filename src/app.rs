//! Core application state and main loop.

use std::time::Instant;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{animation::Cycle, config::Config, events, ui};

/// Application state container for the maze animation.
///
/// This structure holds the state from which Ratatui renders the animation and which Crossterm
/// events update: the exit flag and the running maze cycle.
#[derive(Debug)]
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// asks to quit and starts off `false`.
    pub(crate) exit: bool,
    /// Running maze animation.
    ///
    /// This field owns the current grid, the latest solver snapshot and the timer that schedules
    /// the next solver step. Resets go through [`Cycle::reset`] so pending steps of the old maze
    /// are cancelled.
    pub(crate) cycle: Cycle,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    /// Creates a new instance of the App structure from the command-line configuration.
    ///
    /// The first maze is generated right away and its solve is scheduled to begin after the start
    /// delay.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            exit: false,
            cycle: Cycle::new(config, Instant::now()),
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the current frame, then waits for input or for the next scheduled
    /// solver step, whichever comes first. The loop continues until the exit flag is set, after
    /// which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(std::io::Error::other)
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
