use super::direction::Direction;
use super::snake::Snake;
use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};

/// A cell on the board, relative to the board's top-left corner
pub(crate) type Cell = Position;

/// The square, wraparound board that the snake moves on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    size: u16,
}

impl Grid {
    pub(crate) const MIN_SIZE: u16 = 5;
    /// Largest grid whose board still fits in the display area
    pub(crate) const MAX_SIZE: u16 = 19;

    /// Create a grid `size` cells on a side.  Returns `None` if `size` is
    /// outside `MIN_SIZE..=MAX_SIZE`.
    pub(crate) fn new(size: u16) -> Option<Grid> {
        (Self::MIN_SIZE..=Self::MAX_SIZE)
            .contains(&size)
            .then_some(Grid { size })
    }

    pub(crate) fn size(self) -> u16 {
        self.size
    }

    /// Total number of cells on the grid
    pub(crate) fn area(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    /// Iterate over every cell in the grid, row by row
    pub(crate) fn cells(self) -> Positions {
        Rect::from((
            Position::ORIGIN,
            Size {
                width: self.size,
                height: self.size,
            },
        ))
        .positions()
    }

    /// The snake's starting body and heading: a horizontal line left of
    /// center, facing east.
    pub(crate) fn start_layout(self) -> (Snake, Direction) {
        let head = Cell::new(self.size / 3, self.size / 2);
        let tail = std::iter::successors(Some(head), |&p| Some(Direction::West.advance(p, self)))
            .skip(1)
            .take(consts::INITIAL_SNAKE_LENGTH - 1);
        (Snake::new(head, tail), Direction::East)
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            size: consts::GRID_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(4, false)]
    #[case(5, true)]
    #[case(15, true)]
    #[case(19, true)]
    #[case(20, false)]
    fn test_new(#[case] size: u16, #[case] ok: bool) {
        assert_eq!(Grid::new(size).is_some(), ok);
    }

    #[test]
    fn default_start_layout() {
        let (snake, dir) = Grid::default().start_layout();
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Cell::new(5, 7), Cell::new(4, 7), Cell::new(3, 7)]
        );
        assert_eq!(dir, Direction::East);
    }

    #[test]
    fn cells_cover_grid() {
        let grid = Grid::new(7).unwrap();
        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), grid.area());
        assert!(cells.iter().all(|c| c.x < 7 && c.y < 7));
        assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
        assert_eq!(cells.last(), Some(&Cell::new(6, 6)));
    }
}
