//! Step-by-step depth-first maze solver.
//!
//! The solver runs an iterative depth-first search from the entry to the exit over the open
//! passages of a generated [`Grid`]. Each call to [`step`] advances the search by exactly one move
//! and hands back a fresh [`SolverState`] snapshot, so the animation layer can draw every
//! intermediate state without the solver mutating anything it has already handed out.

use std::collections::BTreeSet;

use crate::{
    grid::Grid,
    types::{Direction, Position},
};

/// Multiplier applied to the cell count to obtain the default step budget.
///
/// A depth-first search over a spanning tree pushes and pops every cell at most once, so a correct
/// maze is always solved well within four steps per cell.
pub const STEP_BUDGET_FACTOR: usize = 4;

/// Progress of a solver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The search has not reached a conclusion yet.
    Running,
    /// The exit was reached; the solution path is available.
    Solved,
    /// The stack emptied without reaching the exit.
    Exhausted,
    /// The step budget ran out before the exit was reached.
    BudgetExceeded,
}

impl Status {
    /// Returns whether the run has stopped, successfully or not.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Returns whether the run stopped without reaching the exit.
    ///
    /// Over a grid produced by the generator this never happens, so a failed run points at a
    /// broken maze rather than at an unlucky search.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Exhausted | Self::BudgetExceeded)
    }

    /// Returns a short human-readable label for status lines and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "solving",
            Self::Solved => "solved",
            Self::Exhausted => "no path to exit",
            Self::BudgetExceeded => "step budget exceeded",
        }
    }
}

/// Snapshot of a depth-first solve at one point in time.
///
/// This structure carries everything the renderer needs to draw a frame: the current depth-first
/// path, the cells expanded so far, the cells being retreated through, and once the exit is
/// found, the solution path. Snapshots are never mutated after [`step`] returns them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverState {
    /// Depth-first path from the entry; the last element is the cell being explored.
    stack: Vec<Position>,
    /// Cells expanded so far.
    visited: BTreeSet<Position>,
    /// Cells in the order they were first expanded.
    visit_order: Vec<Position>,
    /// Dead-end cells the search has retreated out of.
    backtracking: BTreeSet<Position>,
    /// Path from entry to exit, filled in once the exit is reached.
    solution: Vec<Position>,
    /// Cell examined by the most recent step.
    current: Option<Position>,
    /// Number of steps taken.
    steps: usize,
    /// Number of steps allowed before the run is declared failed.
    budget: usize,
    /// Outcome of the run so far.
    status: Status,
}

impl SolverState {
    /// Creates the initial state of a solve over `grid`.
    ///
    /// The stack holds only the entry, nothing has been visited, and the step budget is four steps
    /// per cell.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        let size = grid.size();
        let stack = if size == 0 {
            Vec::new()
        } else {
            vec![grid.entry()]
        };

        Self {
            stack,
            visited: BTreeSet::new(),
            visit_order: Vec::new(),
            backtracking: BTreeSet::new(),
            solution: Vec::new(),
            current: None,
            steps: 0,
            budget: STEP_BUDGET_FACTOR.saturating_mul(size.saturating_mul(size)),
            status: Status::Running,
        }
    }

    /// Replaces the step budget of a state that has not started yet.
    #[must_use]
    pub const fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Returns the current depth-first path from the entry.
    #[must_use]
    pub fn stack(&self) -> &[Position] {
        &self.stack
    }

    /// Returns the cells in the order they were first expanded.
    #[must_use]
    pub fn visit_order(&self) -> &[Position] {
        &self.visit_order
    }

    /// Returns the solution path, entry first; empty until the exit is reached.
    #[must_use]
    pub fn solution(&self) -> &[Position] {
        &self.solution
    }

    /// Returns the cell examined by the most recent step.
    #[must_use]
    pub const fn current(&self) -> Option<Position> {
        self.current
    }

    /// Returns the number of steps taken.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the step budget.
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Returns the outcome of the run so far.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns whether the cell has been expanded.
    #[must_use]
    pub fn is_visited(&self, position: Position) -> bool {
        self.visited.contains(&position)
    }

    /// Returns whether the search has retreated out of the cell as a dead end.
    #[must_use]
    pub fn is_backtracking(&self, position: Position) -> bool {
        self.backtracking.contains(&position)
    }

    /// Marks the cell as expanded, recording it in visit order the first time.
    fn visit(&mut self, position: Position) {
        if self.visited.insert(position) {
            self.visit_order.push(position);
        }
    }

    /// Returns the first neighbour reachable through an open wall that has not been expanded.
    fn next_candidate(&self, grid: &Grid, position: Position) -> Option<Position> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| grid.is_open(position, direction))
            .filter_map(|direction| position.step(direction, grid.size()))
            .find(|next| !self.visited.contains(next))
    }
}

/// Advances a solve by one step and returns the resulting snapshot.
///
/// The step looks at the top of the stack. Reaching the exit freezes the stack as the solution.
/// Otherwise the cell is marked visited and the search moves into the first open, unvisited
/// neighbour in up, right, down, left order, or retreats out of the cell when there is none. A
/// finished state is returned unchanged.
#[must_use]
pub fn step(grid: &Grid, state: &SolverState) -> SolverState {
    let mut next = state.clone();
    if next.status.is_finished() {
        return next;
    }

    next.steps = next.steps.saturating_add(1);

    let Some(&current) = next.stack.last() else {
        next.status = Status::Exhausted;
        next.current = None;
        return next;
    };

    next.current = Some(current);
    next.visit(current);

    if current == grid.exit() {
        next.solution.clone_from(&next.stack);
        next.status = Status::Solved;
        return next;
    }

    if let Some(candidate) = next.next_candidate(grid, current) {
        let _ = next.backtracking.remove(&current);
        next.stack.push(candidate);
    } else {
        let _ = next.backtracking.insert(current);
        let _ = next.stack.pop();
    }

    if next.steps >= next.budget {
        next.status = Status::BudgetExceeded;
        next.current = None;
    }

    next
}

/// Runs a solve over `grid` from the initial state until it finishes.
///
/// The step budget guarantees termination even over a grid that is not a perfect maze.
#[must_use]
pub fn solve(grid: &Grid) -> SolverState {
    let mut state = SolverState::new(grid);
    while !state.status().is_finished() {
        state = step(grid, &state);
    }

    state
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::generator::{self, open_gates};

    /// Builds the two-by-two L-shaped maze: entry, right, then down to the exit.
    fn create_l_shaped_grid() -> Grid {
        let mut grid = Grid::new(2);
        open_gates(&mut grid);
        grid.carve(Position::new(0, 0), Direction::Right);
        grid.carve(Position::new(0, 1), Direction::Down);
        grid
    }

    #[test]
    fn test_l_shaped_maze_solved_at_step_three() {
        let grid = create_l_shaped_grid();

        let first = step(&grid, &SolverState::new(&grid));
        assert_eq!(first.status(), Status::Running);
        assert_eq!(first.current(), Some(Position::new(0, 0)));

        let second = step(&grid, &first);
        assert_eq!(second.status(), Status::Running);
        assert_eq!(second.current(), Some(Position::new(0, 1)));

        let third = step(&grid, &second);
        assert_eq!(third.status(), Status::Solved);
        assert_eq!(third.steps(), 3);
        assert_eq!(
            third.visit_order(),
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
        assert_eq!(third.solution(), third.visit_order());
    }

    #[test]
    fn test_step_does_not_touch_previous_snapshot() {
        let grid = create_l_shaped_grid();
        let initial = SolverState::new(&grid);
        let before = initial.clone();

        let _ = step(&grid, &initial);

        assert_eq!(initial, before);
    }

    #[test]
    fn test_finished_state_is_returned_unchanged() {
        let grid = create_l_shaped_grid();
        let solved = solve(&grid);

        assert_eq!(step(&grid, &solved), solved);
    }

    #[test]
    fn test_dead_end_is_backtracked() {
        // Entry branches both ways; the dead end hangs off the down branch.
        let mut grid = Grid::new(2);
        open_gates(&mut grid);
        grid.carve(Position::new(0, 0), Direction::Down);
        grid.carve(Position::new(0, 0), Direction::Right);
        grid.carve(Position::new(0, 1), Direction::Down);

        let state = solve(&grid);

        assert_eq!(state.status(), Status::Solved);
        // Right comes before down, so the dead end at (1, 0) is never entered.
        assert!(!state.is_visited(Position::new(1, 0)));

        let mut grid = Grid::new(2);
        open_gates(&mut grid);
        grid.carve(Position::new(0, 0), Direction::Right);
        grid.carve(Position::new(0, 0), Direction::Down);
        grid.carve(Position::new(1, 0), Direction::Right);

        let state = solve(&grid);

        assert_eq!(state.status(), Status::Solved);
        assert!(state.is_backtracking(Position::new(0, 1)));
        assert_eq!(
            state.solution(),
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_unreachable_exit_is_exhausted() {
        let mut grid = Grid::new(3);
        open_gates(&mut grid);

        let state = solve(&grid);

        assert_eq!(state.status(), Status::Exhausted);
        assert!(state.status().is_failure());
        assert_eq!(state.current(), None);
        assert!(state.solution().is_empty());
    }

    #[test]
    fn test_budget_exceeded() {
        let mut grid = Grid::new(3);
        open_gates(&mut grid);
        grid.carve(Position::new(0, 0), Direction::Right);
        grid.carve(Position::new(0, 1), Direction::Right);

        let mut state = SolverState::new(&grid).with_budget(2);
        while !state.status().is_finished() {
            state = step(&grid, &state);
        }

        assert_eq!(state.status(), Status::BudgetExceeded);
        assert_eq!(state.steps(), 2);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_generated_mazes_solve_within_budget() {
        let mut rng = StdRng::seed_from_u64(99);

        for size in 1..=16 {
            for _ in 0..5 {
                let grid = generator::generate(size, &mut rng);
                let state = solve(&grid);

                assert_eq!(state.status(), Status::Solved, "side {size} maze unsolved");
                assert!(state.steps() <= STEP_BUDGET_FACTOR * size * size);
                assert_eq!(state.solution().first(), Some(&grid.entry()));
                assert_eq!(state.solution().last(), Some(&grid.exit()));
            }
        }
    }

    #[test]
    fn test_solve_is_deterministic() {
        let grid = generator::generate(10, &mut StdRng::seed_from_u64(5));

        let first = solve(&grid);
        let second = solve(&grid);

        assert_eq!(first.visit_order(), second.visit_order());
        assert_eq!(first.solution(), second.solution());
    }

    #[test]
    fn test_solution_is_connected_path() {
        let grid = generator::generate(12, &mut StdRng::seed_from_u64(11));
        let state = solve(&grid);

        for pair in state.solution().windows(2) {
            let [from, to] = pair else {
                unreachable!("windows of two always have two elements");
            };
            assert!(
                Direction::ALL.into_iter().any(|direction| {
                    grid.is_open(*from, direction) && from.step(direction, grid.size()) == Some(*to)
                }),
                "consecutive solution cells must share an open passage"
            );
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Running.label(), "solving");
        assert_eq!(Status::Solved.label(), "solved");
        assert!(!Status::Running.is_finished());
        assert!(Status::Solved.is_finished());
        assert!(!Status::Solved.is_failure());
        assert!(Status::BudgetExceeded.is_failure());
    }
}
