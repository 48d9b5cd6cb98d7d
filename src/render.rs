//! Text rendering of a maze and its solver state.
//!
//! The renderer turns a [`Grid`] and a [`SolverState`] snapshot into a block of monospaced text:
//! a `+---+` wall row above every grid row, a cell row with `|` side walls and a three-character
//! body per cell, and a closing bottom border. It is a pure function, so drawing the same snapshot
//! twice yields byte-identical output.

use std::collections::BTreeSet;

use crate::{
    grid::Grid,
    pathfinding::{SolverState, Status},
    types::Position,
};

/// Body of the entry cell.
pub const ENTRY_GLYPH: &str = " S ";
/// Body of the exit cell.
pub const EXIT_GLYPH: &str = " E ";
/// Body of the cell examined by the latest solver step.
pub const CURRENT_GLYPH: &str = " \u{2588} ";
/// Body of a cell on the solution path, shown once the maze is solved.
pub const SOLUTION_GLYPH: &str = " \u{2605} ";
/// Body of a dead-end cell the solver has retreated out of.
pub const BACKTRACK_GLYPH: &str = " \u{d7} ";
/// Body of a cell the solver has expanded.
pub const EXPLORED_GLYPH: &str = " \u{b7} ";
/// Body of an untouched cell.
pub const BLANK_GLYPH: &str = "   ";
/// Text shown in place of a maze while no grid is available.
pub const PLACEHOLDER: &str = "Generating...";

/// Segment drawn for a standing horizontal wall.
const WALL_SEGMENT: &str = "---";
/// Segment drawn for a missing horizontal wall.
const GAP_SEGMENT: &str = "   ";

/// Renders the grid and the solver snapshot as a text block.
///
/// Every line has the same width, `4 × N + 1` characters, and the block ends with the bottom
/// border without a trailing newline. An empty grid renders as [`PLACEHOLDER`].
#[must_use]
pub fn render(grid: &Grid, state: &SolverState) -> String {
    if grid.size() == 0 {
        return PLACEHOLDER.to_owned();
    }

    let solution: BTreeSet<Position> = if state.status() == Status::Solved {
        state.solution().iter().copied().collect()
    } else {
        BTreeSet::new()
    };

    let mut frame = String::new();
    for (row, cells) in grid.rows().enumerate() {
        for cell in cells {
            frame.push('+');
            frame.push_str(segment(cell.walls.top));
        }
        frame.push_str("+\n");

        for (col, cell) in cells.iter().enumerate() {
            frame.push(side(cell.walls.left));
            frame.push_str(glyph(grid, state, &solution, Position::new(row, col)));
        }
        frame.push(side(cells.last().is_some_and(|cell| cell.walls.right)));
        frame.push('\n');
    }

    if let Some(cells) = grid.rows().last() {
        for cell in cells {
            frame.push('+');
            frame.push_str(segment(cell.walls.bottom));
        }
    }
    frame.push('+');

    frame
}

/// Picks the horizontal segment for a top or bottom wall.
const fn segment(wall: bool) -> &'static str {
    if wall {
        WALL_SEGMENT
    } else {
        GAP_SEGMENT
    }
}

/// Picks the character for a left or right wall.
const fn side(wall: bool) -> char {
    if wall {
        '|'
    } else {
        ' '
    }
}

/// Picks the body of a cell.
///
/// Precedence, highest first: entry, exit, current cell, solution path (solved runs only),
/// backtracked dead end, explored cell, blank.
fn glyph(
    grid: &Grid,
    state: &SolverState,
    solution: &BTreeSet<Position>,
    position: Position,
) -> &'static str {
    if position == grid.entry() {
        ENTRY_GLYPH
    } else if position == grid.exit() {
        EXIT_GLYPH
    } else if state.current() == Some(position) {
        CURRENT_GLYPH
    } else if solution.contains(&position) {
        SOLUTION_GLYPH
    } else if !state.is_visited(position) {
        BLANK_GLYPH
    } else if state.is_backtracking(position) {
        BACKTRACK_GLYPH
    } else {
        EXPLORED_GLYPH
    }
}
