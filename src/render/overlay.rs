use crate::consts;
use crate::game::{LockCause, PauseReason, RunStatus, Snapshot};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Widget},
};

/// A pop-up drawn over the board while the game is paused or over
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Overlay {
    Paused(PauseReason),
    GameOver {
        cause: LockCause,
        score: u32,
        /// `None` if the best score isn't being saved
        best: Option<u32>,
    },
}

impl Overlay {
    const WIDTH: u16 = 26;

    /// Return the overlay to show for the given game state, if any.  A board
    /// that was just reset shows no overlay so that it can be seen.
    pub(crate) fn for_snapshot(snapshot: &Snapshot<'_>) -> Option<Overlay> {
        match snapshot.status {
            RunStatus::Idle | RunStatus::Running => None,
            RunStatus::Paused(PauseReason::ManualReset) => None,
            RunStatus::Paused(reason) => Some(Overlay::Paused(reason)),
            RunStatus::Locked(cause) => Some(Overlay::GameOver {
                cause,
                score: snapshot.score,
                best: snapshot.best,
            }),
        }
    }

    fn title(self) -> &'static str {
        match self {
            Overlay::Paused(_) => " PAUSED ",
            Overlay::GameOver {
                cause: LockCause::SelfCollision,
                ..
            } => " You ate yourself ",
            Overlay::GameOver {
                cause: LockCause::BoardFilled,
                ..
            } => " Board cleared! ",
        }
    }

    fn lines(self) -> Vec<Line<'static>> {
        match self {
            Overlay::Paused(reason) => {
                let why = if reason == PauseReason::FocusLost {
                    "Window lost focus"
                } else {
                    "Take a breather"
                };
                vec![
                    Line::from(why),
                    Line::default(),
                    key_hint("Resume", "Space"),
                ]
            }
            Overlay::GameOver { score, best, .. } => {
                let mut lines = vec![Line::from(format!("Score: {score}"))];
                if let Some(best) = best {
                    lines.push(Line::from(format!("Best:  {best}")));
                }
                lines.push(Line::default());
                lines.push(key_hint("Play again", "Enter"));
                lines
            }
        }
    }
}

fn key_hint(action: &'static str, key: &'static str) -> Line<'static> {
    Line::from_iter([
        Span::raw(action),
        Span::raw(" ("),
        Span::styled(key, consts::KEY_STYLE),
        Span::raw(")"),
    ])
}

impl Widget for Overlay {
    /*
     * ┌──── You ate yourself ────┐
     * │         Score: 12        │
     * │         Best:  30        │
     * │                          │
     * │    Play again (Enter)    │
     * └──────────────────────────┘
     */

    // `area` is the area of the board; the overlay is centered within it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let block_area = center_rect(
            area,
            Size {
                width: Overlay::WIDTH,
                height,
            },
        );
        let block = Block::bordered()
            .title(self.title())
            .title_alignment(Alignment::Center)
            .style(Style::reset());
        let inner = block.inner(block_area);
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.centered().render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Grid, Snake};

    fn snapshot(snake: &Snake, status: RunStatus, best: Option<u32>) -> Snapshot<'_> {
        Snapshot {
            grid: Grid::default(),
            snake,
            apple: Some(Cell::new(0, 0)),
            score: 12,
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
    fn overlay_choice() {
        let snake = Snake::new(Cell::new(5, 5), []);
        assert_eq!(
            Overlay::for_snapshot(&snapshot(&snake, RunStatus::Idle, None)),
            None
        );
        assert_eq!(
            Overlay::for_snapshot(&snapshot(&snake, RunStatus::Running, None)),
            None
        );
        assert_eq!(
            Overlay::for_snapshot(&snapshot(
                &snake,
                RunStatus::Paused(PauseReason::ManualReset),
                None
            )),
            None
        );
        assert_eq!(
            Overlay::for_snapshot(&snapshot(
                &snake,
                RunStatus::Paused(PauseReason::FocusLost),
                None
            )),
            Some(Overlay::Paused(PauseReason::FocusLost))
        );
        assert_eq!(
            Overlay::for_snapshot(&snapshot(
                &snake,
                RunStatus::Locked(LockCause::SelfCollision),
                Some(30)
            )),
            Some(Overlay::GameOver {
                cause: LockCause::SelfCollision,
                score: 12,
                best: Some(30)
            })
        );
    }

    #[test]
    fn render_game_over() {
        let area = Rect::new(0, 0, 32, 17);
        let mut buffer = Buffer::empty(area);
        Overlay::GameOver {
            cause: LockCause::SelfCollision,
            score: 12,
            best: Some(30),
        }
        .render(area, &mut buffer);
        let rows = (0..17).map(|y| row_text(&buffer, y)).collect::<Vec<_>>();
        let top = rows
            .iter()
            .position(|r| r.contains("You ate yourself"))
            .unwrap();
        assert!(rows[top + 1].contains("Score: 12"));
        assert!(rows[top + 2].contains("Best:  30"));
        assert!(rows[top + 4].contains("Play again (Enter)"));
        assert!(rows[top + 5].contains('└'));
    }

    #[test]
    fn render_game_over_without_best() {
        let area = Rect::new(0, 0, 32, 17);
        let mut buffer = Buffer::empty(area);
        Overlay::GameOver {
            cause: LockCause::BoardFilled,
            score: 224,
            best: None,
        }
        .render(area, &mut buffer);
        let text = (0..17).map(|y| row_text(&buffer, y)).collect::<String>();
        assert!(text.contains("Board cleared!"));
        assert!(text.contains("Score: 224"));
        assert!(!text.contains("Best"));
    }

    #[test]
    fn render_paused() {
        let area = Rect::new(0, 0, 32, 17);
        let mut buffer = Buffer::empty(area);
        Overlay::Paused(PauseReason::Manual).render(area, &mut buffer);
        let text = (0..17).map(|y| row_text(&buffer, y)).collect::<String>();
        assert!(text.contains("PAUSED"));
        assert!(text.contains("Take a breather"));
        assert!(text.contains("Resume (Space)"));
    }
}
