pub(crate) mod controls;
mod overlay;
pub(crate) use self::controls::ControlBar;
use self::overlay::Overlay;
use crate::consts;
use crate::game::{Cell, Grid, PauseReason, RunStatus, Snapshot};
use crate::util::get_display_area;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Margin, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Colors used to draw the pieces on the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Palette {
    pub(crate) snake: Color,
    pub(crate) head: Color,
    pub(crate) apple: Color,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            snake: consts::SNAKE_COLOR,
            head: consts::HEAD_COLOR,
            apple: consts::APPLE_COLOR,
        }
    }
}

/// Where each part of the game screen goes within the terminal
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ScreenLayout {
    pub(crate) hud: Rect,
    /// The board, including its border
    pub(crate) board: Rect,
    pub(crate) status: Rect,
    pub(crate) controls: Rect,
}

impl ScreenLayout {
    pub(crate) fn new(area: Rect, grid: Grid) -> ScreenLayout {
        let display = get_display_area(area);
        let board_width = grid
            .size()
            .saturating_mul(consts::CELL_WIDTH)
            .saturating_add(2);
        let board_height = grid.size().saturating_add(2);
        let [hud, board, status, controls] = Layout::vertical([1, board_height, 1, 1])
            .flex(Flex::Center)
            .areas(display);
        let [board] = Layout::horizontal([board_width])
            .flex(Flex::Center)
            .areas(board);
        let hud = Rect {
            x: board.x,
            width: board.width,
            ..hud
        };
        ScreenLayout {
            hud,
            board,
            status,
            controls,
        }
    }

    /// The area inside the board's border
    pub(crate) fn field(&self) -> Rect {
        self.board.inner(Margin::new(1, 1))
    }

    /// The terminal position of the left edge of `cell`.  Returns `None` if
    /// the cell does not fit on screen.
    pub(crate) fn cell_position(&self, cell: Cell) -> Option<Position> {
        let field = self.field();
        let x = field
            .x
            .checked_add(cell.x.checked_mul(consts::CELL_WIDTH)?)?;
        let y = field.y.checked_add(cell.y)?;
        let pos = Position { x, y };
        field.contains(pos).then_some(pos)
    }
}

/// Draws a [`Snapshot`] of the game: score bar, board, status line, control
/// buttons, and any pause or game-over pop-up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameView<'a> {
    pub(crate) snapshot: Snapshot<'a>,
    pub(crate) palette: Palette,
}

impl GameView<'_> {
    fn render_hud(&self, area: Rect, buf: &mut Buffer) {
        Line::styled(format!(" Score: {}", self.snapshot.score), consts::SCORE_BAR_STYLE)
            .render(area, buf);
        if let Some(best) = self.snapshot.best {
            Line::from(format!("Best: {best} "))
                .right_aligned()
                .render(area, buf);
        }
    }

    fn render_board(&self, layout: &ScreenLayout, buf: &mut Buffer) {
        Block::bordered().render(layout.board, buf);
        let mut draw = |cell: Cell, symbol: &str, style: Style| {
            if let Some(Position { x, y }) = layout.cell_position(cell) {
                let _ = buf.set_stringn(x, y, symbol, usize::from(consts::CELL_WIDTH), style);
            }
        };
        for cell in self.snapshot.grid.cells() {
            draw(cell, consts::GRID_SYMBOL, consts::GRID_STYLE);
        }
        if let Some(apple) = self.snapshot.apple {
            draw(
                apple,
                consts::APPLE_SYMBOL,
                Style::new().fg(self.palette.apple),
            );
        }
        let body_style = Style::new().fg(self.palette.snake);
        for cell in self.snapshot.snake.cells().skip(1) {
            draw(cell, consts::SNAKE_SYMBOL, body_style);
        }
        draw(
            self.snapshot.snake.head(),
            consts::SNAKE_SYMBOL,
            Style::new().fg(self.palette.head),
        );
    }

    fn status_line(&self) -> Line<'static> {
        let hints: &[(&str, &str)] = match self.snapshot.status {
            RunStatus::Idle | RunStatus::Paused(PauseReason::ManualReset) => {
                &[("↑/↓", "start"), ("q", "quit")]
            }
            RunStatus::Running => &[("Space", "pause"), ("r", "reset"), ("q", "quit")],
            RunStatus::Paused(_) => &[("Space", "resume"), ("r", "reset"), ("q", "quit")],
            RunStatus::Locked(_) => &[("Enter", "play again"), ("q", "quit")],
        };
        let mut line = Line::default();
        for (i, &(key, action)) in hints.iter().enumerate() {
            if i > 0 {
                line.push_span(" · ");
            }
            line.push_span(Span::styled(key, consts::KEY_STYLE));
            line.push_span(" ");
            line.push_span(action);
        }
        line.centered()
    }
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ScreenLayout::new(area, self.snapshot.grid);
        self.render_hud(layout.hud, buf);
        self.render_board(&layout, buf);
        self.status_line().render(layout.status, buf);
        ControlBar {
            running: self.snapshot.status.is_running(),
        }
        .render(layout.controls, buf);
        if let Some(overlay) = Overlay::for_snapshot(&self.snapshot) {
            overlay.render(layout.board, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{LockCause, Snake};

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn snake() -> Snake {
        Snake::new(Cell::new(5, 7), [Cell::new(4, 7), Cell::new(3, 7)])
    }

    fn snapshot(snake: &Snake, status: RunStatus, best: Option<u32>) -> Snapshot<'_> {
        Snapshot {
            grid: Grid::default(),
            snake,
            apple: Some(Cell::new(10, 2)),
            score: 7,
            best,
            status,
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_owned())
            .collect()
    }

    #[test]
    fn layout() {
        let layout = ScreenLayout::new(screen(), Grid::default());
        assert_eq!(layout.hud, Rect::new(24, 2, 32, 1));
        assert_eq!(layout.board, Rect::new(24, 3, 32, 17));
        assert_eq!(layout.status, Rect::new(0, 20, 80, 1));
        assert_eq!(layout.controls, Rect::new(0, 21, 80, 1));
        assert_eq!(layout.field(), Rect::new(25, 4, 30, 15));
        assert_eq!(
            layout.cell_position(Cell::new(0, 0)),
            Some(Position::new(25, 4))
        );
        assert_eq!(
            layout.cell_position(Cell::new(14, 14)),
            Some(Position::new(53, 18))
        );
    }

    #[test]
    fn layout_in_larger_terminal() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30), Grid::default());
        assert_eq!(layout.board, Rect::new(34, 6, 32, 17));
    }

    #[test]
    fn draw_pieces() {
        let snake = snake();
        let palette = Palette::default();
        let view = GameView {
            snapshot: snapshot(&snake, RunStatus::Running, None),
            palette,
        };
        let mut buffer = Buffer::empty(screen());
        view.render(screen(), &mut buffer);
        // head at (5, 7)
        let head = &buffer[(35u16, 11u16)];
        assert_eq!(head.symbol(), "█");
        assert_eq!(head.fg, palette.head);
        // body at (4, 7)
        let body = &buffer[(33u16, 11u16)];
        assert_eq!(body.symbol(), "█");
        assert_eq!(body.fg, palette.snake);
        // apple at (10, 2)
        let apple = &buffer[(45u16, 6u16)];
        assert_eq!(apple.symbol(), consts::APPLE_SYMBOL);
        assert_eq!(apple.fg, palette.apple);
        // empty cell at (0, 0)
        assert_eq!(buffer[(25u16, 4u16)].symbol(), consts::GRID_SYMBOL);
        assert!(row_text(&buffer, 2).contains("Score: 7"));
        assert!(!row_text(&buffer, 2).contains("Best"));
        assert!(row_text(&buffer, 21).contains("[Pause]"));
        assert!(row_text(&buffer, 20).contains("Space pause"));
    }

    #[test]
    fn draw_best() {
        let snake = snake();
        let view = GameView {
            snapshot: snapshot(&snake, RunStatus::Idle, Some(31)),
            palette: Palette::default(),
        };
        let mut buffer = Buffer::empty(screen());
        view.render(screen(), &mut buffer);
        let hud = row_text(&buffer, 2);
        assert!(hud.contains("Score: 7"));
        assert!(hud.contains("Best: 31"));
        assert!(row_text(&buffer, 20).contains("↑/↓ start"));
        assert!(row_text(&buffer, 21).contains("[Resume]"));
    }

    #[test]
    fn draw_game_over() {
        let snake = snake();
        let view = GameView {
            snapshot: snapshot(
                &snake,
                RunStatus::Locked(LockCause::SelfCollision),
                Some(31),
            ),
            palette: Palette::default(),
        };
        let mut buffer = Buffer::empty(screen());
        view.render(screen(), &mut buffer);
        let text = (0..24).map(|y| row_text(&buffer, y)).collect::<Vec<_>>();
        assert!(text.iter().any(|r| r.contains("You ate yourself")));
        assert!(text[20].contains("Enter play again"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let snake = snake();
        let view = GameView {
            snapshot: snapshot(&snake, RunStatus::Running, Some(3)),
            palette: Palette::default(),
        };
        let area = Rect::new(0, 0, 12, 5);
        let mut buffer = Buffer::empty(area);
        view.render(area, &mut buffer);
    }
}
