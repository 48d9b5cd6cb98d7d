//! Terminal animation of a depth-first maze generator and solver.
//!
//! This crate generates perfect mazes with a randomized depth-first search, solves them with a
//! step-by-step depth-first search whose intermediate states can be drawn one frame at a time, and
//! renders every state as monospaced text art. The binary shows the endless generate, solve and
//! regenerate cycle in the terminal; the library exposes each stage on its own.
//!
//! The stages are [`generator::generate`], [`pathfinding::step`] (or [`pathfinding::solve`] to
//! run a solve to completion) and [`render::render`]. [`animation::Cycle`] strings them together
//! on a cancellable timer for the terminal front end.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod events;
mod ui;

pub mod animation;
pub mod config;
pub mod generator;
pub mod grid;
pub mod logging;
pub mod pathfinding;
pub mod render;
pub mod types;

pub use app::App;
pub use config::Config;

/// Generates and fully solves one maze, returning its final frame.
///
/// This is the non-interactive counterpart of the terminal animation, used by the `--print` flag.
#[must_use]
pub fn solved_frame(config: &Config) -> String {
    let grid = generator::generate(config.grid_size(), &mut config.rng());
    let state = pathfinding::solve(&grid);

    render::render(&grid, &state)
}
