//! Animation timing and cycle management.
//!
//! This module drives the endless generate, solve, pause and regenerate loop. The [`Scheduler`]
//! holds at most one pending task tagged with the cycle that scheduled it, and cancelling it moves
//! on to a new cycle so nothing scheduled before the cancel can ever fire. The [`Cycle`] owns the
//! grid, the latest solver snapshot and the scheduler, and is the single state object the
//! terminal front end keeps between frames.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tracing::{debug, error, info, trace};

use crate::{
    config::Config,
    generator,
    grid::Grid,
    pathfinding::{self, SolverState, Status},
    render,
};

/// Delay between showing a new maze and starting to solve it, in milliseconds.
pub const START_DELAY_MS: u64 = 100;

/// Time the solved maze stays on screen before a new one is generated, in milliseconds.
pub const SOLVED_PAUSE_MS: u64 = 1000;

/// Time a failed solve stays on screen before a new maze is generated, in milliseconds.
pub const FAILURE_PAUSE_MS: u64 = 2000;

/// Work the scheduler can hand back to the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// Reset the solver and take its first step.
    StartSolving,
    /// Take the next solver step.
    Step,
    /// Throw the current maze away and generate a new one.
    Regenerate,
}

/// Task waiting for its due time.
#[derive(Clone, Copy, Debug)]
struct Pending {
    /// Cycle that scheduled the task.
    cycle: u64,
    /// Work to run.
    task: Task,
    /// Earliest instant at which the task may run.
    due: Instant,
}

/// Cancellable single-slot timer.
///
/// The scheduler keeps at most one pending task. Every task is tagged with the cycle that was
/// current when it was scheduled, and [`Scheduler::poll`] only releases tasks of the current
/// cycle. Time is passed in by the caller, which keeps the scheduler free of sleeping and easy to
/// drive from tests.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    /// Number of the current cycle.
    cycle: u64,
    /// Task waiting to run, if any.
    pending: Option<Pending>,
}

impl Scheduler {
    /// Creates an idle scheduler at cycle zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cycle: 0,
            pending: None,
        }
    }

    /// Returns the number of the current cycle.
    #[must_use]
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Returns the instant at which the pending task becomes due.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due)
    }

    /// Schedules `task` to run `delay` after `now`, replacing any pending task.
    pub fn schedule(&mut self, task: Task, delay: Duration, now: Instant) {
        self.pending = Some(Pending {
            cycle: self.cycle,
            task,
            due: now.checked_add(delay).unwrap_or(now),
        });
    }

    /// Drops the pending task and moves on to a new cycle.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.cycle = self.cycle.wrapping_add(1);
    }

    /// Takes the pending task if it is due at `now`.
    ///
    /// A task left over from an earlier cycle is discarded instead of being returned.
    pub fn poll(&mut self, now: Instant) -> Option<Task> {
        let pending = self.pending.take()?;

        if pending.cycle != self.cycle {
            return None;
        }
        if now < pending.due {
            self.pending = Some(pending);
            return None;
        }

        Some(pending.task)
    }
}

/// Delays that pace a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Delay between generating a maze and the first solver step.
    pub start_delay: Duration,
    /// Delay between two solver steps.
    pub step_delay: Duration,
    /// Time a solved maze stays on screen.
    pub solved_pause: Duration,
    /// Time a failed solve stays on screen.
    pub failure_pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(START_DELAY_MS),
            step_delay: Duration::from_millis(crate::config::DEFAULT_STEP_DELAY_MS),
            solved_pause: Duration::from_millis(SOLVED_PAUSE_MS),
            failure_pause: Duration::from_millis(FAILURE_PAUSE_MS),
        }
    }
}

/// State of the running maze animation.
///
/// A cycle begins with a freshly generated grid, solves it one scheduled step at a time, keeps the
/// result on screen for a short pause and then starts over with a new grid. Resetting cancels the
/// scheduler before the new grid is assigned, so a step belonging to the old grid can never run
/// against the new one.
#[derive(Debug)]
pub struct Cycle {
    /// Side length of every generated grid.
    size: usize,
    /// Pacing of the cycle.
    timing: Timing,
    /// Source of randomness for the generator.
    rng: StdRng,
    /// Grid being solved.
    grid: Grid,
    /// Latest solver snapshot.
    state: SolverState,
    /// Timer for the next task.
    scheduler: Scheduler,
    /// Whether ticks are being ignored.
    paused: bool,
}

impl Cycle {
    /// Creates a cycle from the command-line configuration and generates its first grid.
    #[must_use]
    pub fn new(config: &Config, now: Instant) -> Self {
        Self::with_rng(config.grid_size(), Timing::from(config), config.rng(), now)
    }

    /// Creates a cycle from explicit parts and generates its first grid.
    #[must_use]
    pub fn with_rng(size: usize, timing: Timing, rng: StdRng, now: Instant) -> Self {
        let grid = Grid::new(0);
        let state = SolverState::new(&grid);
        let mut cycle = Self {
            size,
            timing,
            rng,
            grid,
            state,
            scheduler: Scheduler::new(),
            paused: false,
        };
        cycle.regenerate(now);

        cycle
    }

    /// Returns the grid being solved.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the latest solver snapshot.
    #[must_use]
    pub const fn state(&self) -> &SolverState {
        &self.state
    }

    /// Returns the number of the current cycle.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.scheduler.cycle()
    }

    /// Returns whether the animation is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the instant at which the next task becomes due, if the animation is running.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        if self.paused {
            None
        } else {
            self.scheduler.next_due()
        }
    }

    /// Renders the current grid and snapshot as text.
    #[must_use]
    pub fn frame(&self) -> String {
        render::render(&self.grid, &self.state)
    }

    /// Runs the task that is due at `now`, if any, and reports whether the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }

        let Some(task) = self.scheduler.poll(now) else {
            return false;
        };

        match task {
            Task::StartSolving => {
                self.state = SolverState::new(&self.grid);
                self.advance(now);
            }
            Task::Step => self.advance(now),
            Task::Regenerate => self.regenerate(now),
        }

        true
    }

    /// Abandons the current grid and starts a new cycle straight away.
    pub fn reset(&mut self, now: Instant) {
        debug!(cycle = self.number(), "reset requested");
        self.regenerate(now);
    }

    /// Pauses or resumes the animation.
    ///
    /// A paused cycle never touches its state. Resuming a solve in progress schedules its next
    /// step one step delay after `now`.
    pub fn toggle_pause(&mut self, now: Instant) {
        self.paused = !self.paused;
        if !self.paused && !self.state.status().is_finished() && self.state.steps() > 0 {
            self.scheduler.schedule(Task::Step, self.timing.step_delay, now);
        }
    }

    /// Cancels whatever the old cycle scheduled, then generates a new grid and schedules its solve.
    fn regenerate(&mut self, now: Instant) {
        self.scheduler.cancel();
        self.grid = generator::generate(self.size, &mut self.rng);
        self.state = SolverState::new(&self.grid);
        debug!(cycle = self.number(), size = self.size, "generated maze");

        self.scheduler.schedule(Task::StartSolving, self.timing.start_delay, now);
    }

    /// Takes one solver step and schedules whatever follows it.
    fn advance(&mut self, now: Instant) {
        self.state = pathfinding::step(&self.grid, &self.state);
        trace!(
            cycle = self.number(),
            steps = self.state.steps(),
            current = ?self.state.current(),
            "solver step"
        );

        match self.state.status() {
            Status::Running => {
                self.scheduler.schedule(Task::Step, self.timing.step_delay, now);
            }
            Status::Solved => {
                info!(
                    cycle = self.number(),
                    steps = self.state.steps(),
                    length = self.state.solution().len(),
                    "maze solved"
                );
                self.scheduler.schedule(Task::Regenerate, self.timing.solved_pause, now);
            }
            status @ (Status::Exhausted | Status::BudgetExceeded) => {
                error!(
                    cycle = self.number(),
                    steps = self.state.steps(),
                    budget = self.state.budget(),
                    status = status.label(),
                    "solver failed to reach the exit; generated maze is inconsistent"
                );
                self.scheduler.schedule(Task::Regenerate, self.timing.failure_pause, now);
            }
        }
    }
}
