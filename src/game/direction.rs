use super::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Convert a unit vector, with y increasing downwards, into a
    /// `Direction`.  Returns `None` for anything other than the four unit
    /// vectors.
    pub(crate) fn from_vector(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    pub(crate) fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    /// Do `self` and `other` move along the same axis?
    pub(crate) fn shares_axis(self, other: Direction) -> bool {
        self.is_horizontal() == other.is_horizontal()
    }

    /// Return the cell one step from `pos` in this direction, wrapping around
    /// the edges of `grid`.
    pub(crate) fn advance(self, pos: Cell, grid: Grid) -> Cell {
        let Cell { mut x, mut y } = pos;
        let size = grid.size();
        match self {
            Direction::North => y = decrement_wrapping(y, size),
            Direction::East => x = increment_wrapping(x, size),
            Direction::South => y = increment_wrapping(y, size),
            Direction::West => x = decrement_wrapping(x, size),
        }
        Cell { x, y }
    }
}

fn decrement_wrapping(x: u16, max: u16) -> u16 {
    x.checked_sub(1).unwrap_or(max - 1)
}

fn increment_wrapping(x: u16, max: u16) -> u16 {
    x.checked_add(1).filter(|&xx| xx < max).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::North, Cell::new(2, 7), Cell::new(2, 6))]
    #[case(Direction::South, Cell::new(2, 7), Cell::new(2, 8))]
    #[case(Direction::East, Cell::new(2, 7), Cell::new(3, 7))]
    #[case(Direction::West, Cell::new(2, 7), Cell::new(1, 7))]
    #[case(Direction::North, Cell::new(2, 0), Cell::new(2, 14))]
    #[case(Direction::South, Cell::new(2, 14), Cell::new(2, 0))]
    #[case(Direction::East, Cell::new(14, 7), Cell::new(0, 7))]
    #[case(Direction::West, Cell::new(0, 7), Cell::new(14, 7))]
    #[case(Direction::West, Cell::new(0, 0), Cell::new(14, 0))]
    #[case(Direction::North, Cell::new(14, 0), Cell::new(14, 14))]
    fn test_direction_advance(#[case] d: Direction, #[case] pos: Cell, #[case] r: Cell) {
        assert_eq!(d.advance(pos, Grid::default()), r);
    }

    #[rstest]
    #[case(0, -1, Some(Direction::North))]
    #[case(1, 0, Some(Direction::East))]
    #[case(0, 1, Some(Direction::South))]
    #[case(-1, 0, Some(Direction::West))]
    #[case(0, 0, None)]
    #[case(1, 1, None)]
    #[case(-1, 1, None)]
    #[case(2, 0, None)]
    #[case(0, -3, None)]
    fn test_from_vector(#[case] dx: i32, #[case] dy: i32, #[case] r: Option<Direction>) {
        assert_eq!(Direction::from_vector(dx, dy), r);
    }
}
