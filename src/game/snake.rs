use super::grid::Cell;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The body is stored head first.  It is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake from its head and the rest of its body, ordered from
    /// the neck to the tip of the tail
    pub(crate) fn new<I: IntoIterator<Item = Cell>>(head: Cell, tail: I) -> Snake {
        let mut body = VecDeque::from([head]);
        body.extend(tail);
        Snake { body }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.body[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Iterate over the snake's cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Move the head to `head`, keeping the tail in place
    pub(crate) fn push_head(&mut self, head: Cell) {
        self.body.push_front(head);
    }

    /// Drop the last cell of the tail.  A one-cell snake is left alone.
    pub(crate) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake() -> Snake {
        Snake::new(Cell::new(4, 7), [Cell::new(3, 7), Cell::new(2, 7)])
    }

    #[test]
    fn head_is_first() {
        let snake = snake();
        assert_eq!(snake.head(), Cell::new(4, 7));
        assert_eq!(snake.len(), 3);
        assert!(snake.contains(Cell::new(2, 7)));
        assert!(!snake.contains(Cell::new(5, 7)));
    }

    #[test]
    fn move_forwards() {
        let mut snake = snake();
        snake.push_head(Cell::new(5, 7));
        snake.drop_tail();
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Cell::new(5, 7), Cell::new(4, 7), Cell::new(3, 7)]
        );
    }

    #[test]
    fn grow() {
        let mut snake = snake();
        snake.push_head(Cell::new(5, 7));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(5, 7));
    }

    #[test]
    fn single_cell_keeps_tail() {
        let mut snake = Snake::new(Cell::new(0, 0), []);
        snake.drop_tail();
        assert_eq!(snake.len(), 1);
    }
}
