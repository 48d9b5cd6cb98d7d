//! Maze grid storage.
//!
//! This module contains the [`Grid`] and [`Cell`] types that hold the wall layout of a square maze,
//! along with the helpers the generator and the solver use to carve and query passages.

use std::slice::Chunks;

use crate::types::{Direction, Position, Walls};

/// Single square of the maze.
///
/// This structure stores the four walls of the square and the flag the generator uses to remember
/// which cells its depth-first walk has already reached. Animation state is kept apart, in the
/// solver's snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Walls around the cell.
    pub walls: Walls,
    /// Whether the generator has reached this cell.
    pub visited: bool,
}

/// Square maze grid stored in row-major order.
///
/// This structure owns every cell of an N×N maze. A freshly created grid has all of its walls
/// standing; after generation it forms a spanning tree over the cells, with exactly one path
/// between any two of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of cells along each side.
    size: usize,
    /// Cells laid out row after row.
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with `size` cells per side and every wall standing.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size.saturating_mul(size)],
        }
    }

    /// Returns the number of cells along each side.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the top-left cell, where the maze is entered.
    #[must_use]
    pub const fn entry(&self) -> Position {
        Position::new(0, 0)
    }

    /// Returns the bottom-right cell, where the maze is left.
    #[must_use]
    pub const fn exit(&self) -> Position {
        let last = self.size.saturating_sub(1);
        Position::new(last, last)
    }

    /// Maps a position to its offset in the row-major cell vector.
    fn index(&self, position: Position) -> Option<usize> {
        (position.row < self.size && position.col < self.size)
            .then(|| position.row * self.size + position.col)
    }

    /// Returns the cell at the given position, if it lies inside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).and_then(|idx| self.cells.get(idx))
    }

    /// Returns a mutable reference to the cell at the given position, if it lies inside the grid.
    pub fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index(position).and_then(|idx| self.cells.get_mut(idx))
    }

    /// Returns whether the wall on the given side of a cell is down.
    ///
    /// Positions outside the grid are treated as fully walled in.
    #[must_use]
    pub fn is_open(&self, position: Position, direction: Direction) -> bool {
        self.cell(position)
            .is_some_and(|cell| !cell.walls.has(direction))
    }

    /// Removes the wall on the given side of a cell.
    ///
    /// The matching wall of the neighbour is removed as well so both cells agree on the passage.
    /// When the side faces the outside of the grid only the cell's own wall is removed, which is
    /// how the entry and exit gates are opened.
    pub fn carve(&mut self, position: Position, direction: Direction) {
        if let Some(cell) = self.cell_mut(position) {
            cell.walls.open(direction);
        }

        if let Some(neighbour) = position
            .step(direction, self.size)
            .and_then(|next| self.cell_mut(next))
        {
            neighbour.walls.open(direction.opposite());
        }
    }

    /// Counts the open passages between pairs of cells inside the grid.
    ///
    /// Gates on the outer border are not counted. A perfect maze over N×N cells has exactly
    /// N²−1 passages.
    #[must_use]
    pub fn passages(&self) -> usize {
        self.positions()
            .map(|position| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&direction| {
                        position.step(direction, self.size).is_some()
                            && self.is_open(position, direction)
                    })
                    .count()
            })
            .sum()
    }

    /// Returns every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    /// Returns the rows of the grid, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Chunks<'_, Cell> {
        self.cells.chunks(self.size.max(1))
    }
}
