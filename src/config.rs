//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng as _};

use crate::animation::Timing;

/// Default number of cells along each side of the maze.
pub const DEFAULT_SIZE: u16 = 10;

/// Default delay between two solver steps, in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 100;

/// Runtime configuration of the maze animation.
///
/// This structure is parsed from the command line. Every field has a default matching the
/// animation's reference pacing, so running the binary without arguments gives a ten-by-ten maze
/// solved at ten steps per second.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// Number of cells along each side of the maze.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SIZE,
        value_parser = clap::value_parser!(u16).range(1..=64)
    )]
    pub size: u16,
    /// Delay between two solver steps, in milliseconds.
    #[arg(short, long = "delay", value_name = "MS", default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub delay_ms: u64,
    /// Seed for the maze generator; a fresh random seed is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Generate and solve a single maze, print the final frame and exit.
    #[arg(long)]
    pub print: bool,
    /// Write logs to this file; logging is disabled when omitted.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from([env!("CARGO_PKG_NAME")])
    }
}

impl Config {
    /// Returns the maze side length as an index-friendly integer.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        usize::from(self.size)
    }

    /// Returns the delay between two solver steps.
    #[must_use]
    pub const fn step_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Builds the random number generator the maze generator draws from.
    ///
    /// A configured seed gives a reproducible sequence of mazes; otherwise the generator is seeded
    /// from the thread-local entropy source.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed.map_or_else(
            || StdRng::from_rng(&mut rand::rng()),
            StdRng::seed_from_u64,
        )
    }
}

impl From<&Config> for Timing {
    fn from(config: &Config) -> Self {
        Self {
            step_delay: config.step_delay(),
            ..Self::default()
        }
    }
}
