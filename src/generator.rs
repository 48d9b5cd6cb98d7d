//! Maze generation with a randomized depth-first search.
//!
//! The generator walks the grid from the entry cell, always stepping into a random unvisited
//! neighbour and carving the wall on the way, and backs up along its stack whenever it reaches a
//! dead end. Once the stack runs dry every cell has been reached exactly once, so the carved
//! passages form a spanning tree: a perfect maze.

use rand::{prelude::IndexedRandom as _, Rng};

use crate::{
    grid::Grid,
    types::{Direction, Position},
};

/// Generates a perfect maze with `size` cells per side.
///
/// The neighbour choice at every step is drawn uniformly from `rng`, so a seeded generator yields
/// the same maze every time. The entry and exit gates are opened after the walk regardless of how
/// the walk went. A size of zero produces an empty grid.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::new(size);
    if size == 0 {
        return grid;
    }

    let entry = grid.entry();
    mark_visited(&mut grid, entry);
    let mut stack = vec![entry];

    while let Some(&current) = stack.last() {
        let candidates = unvisited_neighbours(&grid, current);

        if let Some(&(direction, next)) = candidates.choose(rng) {
            grid.carve(current, direction);
            mark_visited(&mut grid, next);
            stack.push(next);
        } else {
            let _ = stack.pop();
        }
    }

    open_gates(&mut grid);

    grid
}

/// Opens the outward-facing walls of the entry and exit cells.
///
/// The entry loses its top and left walls and the exit its bottom and right walls, which lets the
/// maze be entered and left from outside the grid.
pub fn open_gates(grid: &mut Grid) {
    let entry = grid.entry();
    let exit = grid.exit();

    grid.carve(entry, Direction::Up);
    grid.carve(entry, Direction::Left);
    grid.carve(exit, Direction::Down);
    grid.carve(exit, Direction::Right);
}

/// Flags a cell as reached by the generator.
fn mark_visited(grid: &mut Grid, position: Position) {
    if let Some(cell) = grid.cell_mut(position) {
        cell.visited = true;
    }
}

/// Collects the in-bounds neighbours the generator has not reached yet, in neighbour order.
fn unvisited_neighbours(grid: &Grid, position: Position) -> Vec<(Direction, Position)> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            position
                .step(direction, grid.size())
                .map(|next| (direction, next))
        })
        .filter(|&(_, next)| grid.cell(next).is_some_and(|cell| !cell.visited))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    /// Counts the cells reachable from the entry through open passages.
    fn reachable_from_entry(grid: &Grid) -> usize {
        let mut seen = BTreeSet::from([grid.entry()]);
        let mut queue = VecDeque::from([grid.entry()]);

        while let Some(position) = queue.pop_front() {
            for direction in Direction::ALL {
                if !grid.is_open(position, direction) {
                    continue;
                }
                if let Some(next) = position.step(direction, grid.size()) {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        seen.len()
    }

    #[test]
    fn test_generated_maze_is_spanning_tree() {
        let mut rng = StdRng::seed_from_u64(7);

        for size in 2..=12 {
            let grid = generate(size, &mut rng);

            assert_eq!(
                grid.passages(),
                size * size - 1,
                "a perfect maze of side {size} has one passage fewer than cells"
            );
            assert_eq!(
                reachable_from_entry(&grid),
                size * size,
                "every cell of side {size} maze must be reachable"
            );
        }
    }

    #[test]
    fn test_gates_are_open() {
        let mut rng = StdRng::seed_from_u64(42);

        for size in 1..=8 {
            let grid = generate(size, &mut rng);
            let entry = grid.entry();
            let exit = grid.exit();

            assert!(grid.is_open(entry, Direction::Up), "entry top wall");
            assert!(grid.is_open(entry, Direction::Left), "entry left wall");
            assert!(grid.is_open(exit, Direction::Down), "exit bottom wall");
            assert!(grid.is_open(exit, Direction::Right), "exit right wall");
        }
    }

    #[test]
    fn test_every_cell_visited() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = generate(6, &mut rng);

        assert!(grid
            .positions()
            .all(|position| grid.cell(position).is_some_and(|cell| cell.visited)));
    }

    #[test]
    fn test_same_seed_same_maze() {
        let first = generate(10, &mut StdRng::seed_from_u64(1234));
        let second = generate(10, &mut StdRng::seed_from_u64(1234));

        assert_eq!(first, second);
    }

    #[test]
    fn test_single_cell_maze() {
        let grid = generate(1, &mut StdRng::seed_from_u64(0));

        assert_eq!(grid.passages(), 0);
        assert!(Direction::ALL
            .into_iter()
            .all(|direction| grid.is_open(grid.entry(), direction)));
    }

    #[test]
    fn test_empty_maze() {
        let grid = generate(0, &mut StdRng::seed_from_u64(0));

        assert_eq!(grid.size(), 0);
        assert_eq!(grid.positions().count(), 0);
    }
}
