//! Coordinate, direction and wall types shared by the maze generator, solver and renderer.

/// Grid coordinate of a maze cell.
///
/// This structure identifies a cell by its row and column in the square grid. The derived ordering
/// is row-major, which keeps the solver's position sets iterating in a stable order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, counted from the top of the grid.
    pub row: usize,
    /// Column index, counted from the left of the grid.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position one cell away in the given direction.
    ///
    /// The result is `None` when the move would leave a square grid with `size` cells per side,
    /// which is how both the generator and the solver bounds-check their neighbours.
    #[must_use]
    pub fn step(self, direction: Direction, size: usize) -> Option<Self> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Right => (self.row, self.col.checked_add(1)?),
            Direction::Down => (self.row.checked_add(1)?, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
        };

        (row < size && col < size).then_some(Self { row, col })
    }
}

/// Cardinal direction between two neighbouring cells.
///
/// The declaration order doubles as the neighbour order used everywhere in the crate: up, right,
/// down, left. The solver relies on it as its tie-break, so reordering the variants changes which
/// path gets explored first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last column.
    Right,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
}

impl Direction {
    /// All four directions in neighbour order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns the direction pointing back the way this one came.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }
}

/// Wall flags of a single cell.
///
/// Each flag is `true` while the wall is standing. Two neighbouring cells each carry their own
/// copy of the wall between them, and the generator always clears both sides together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "One flag per side of a square cell is the natural representation."
)]
pub struct Walls {
    /// Wall on the side facing [`Direction::Up`].
    pub top: bool,
    /// Wall on the side facing [`Direction::Right`].
    pub right: bool,
    /// Wall on the side facing [`Direction::Down`].
    pub bottom: bool,
    /// Wall on the side facing [`Direction::Left`].
    pub left: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self::CLOSED
    }
}

impl Walls {
    /// All four walls standing.
    pub const CLOSED: Self = Self {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    /// Returns whether the wall on the given side is standing.
    #[must_use]
    pub const fn has(self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
        }
    }

    /// Knocks down the wall on the given side.
    pub fn open(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.top = false,
            Direction::Right => self.right = false,
            Direction::Down => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_bounds() {
        let origin = Position::new(1, 1);

        assert_eq!(origin.step(Direction::Up, 3), Some(Position::new(0, 1)));
        assert_eq!(origin.step(Direction::Right, 3), Some(Position::new(1, 2)));
        assert_eq!(origin.step(Direction::Down, 3), Some(Position::new(2, 1)));
        assert_eq!(origin.step(Direction::Left, 3), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_step_outside_bounds() {
        let corner = Position::new(0, 0);
        let far_corner = Position::new(2, 2);

        assert_eq!(corner.step(Direction::Up, 3), None);
        assert_eq!(corner.step(Direction::Left, 3), None);
        assert_eq!(far_corner.step(Direction::Down, 3), None);
        assert_eq!(far_corner.step(Direction::Right, 3), None);
    }

    #[test]
    fn test_position_ordering_is_row_major() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        positions.sort_unstable();

        assert_eq!(
            positions,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn test_walls_open() {
        let mut walls = Walls::default();
        assert_eq!(walls, Walls::CLOSED);

        walls.open(Direction::Right);

        assert!(!walls.has(Direction::Right));
        assert!(walls.has(Direction::Up));
        assert!(walls.has(Direction::Down));
        assert!(walls.has(Direction::Left));
    }
}
