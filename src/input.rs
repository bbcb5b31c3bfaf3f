//! Mouse input: clicks on the on-screen buttons, and swipes across the board.
//!
//! A swipe starts with a left-button press on the board.  Drag events are
//! measured against that starting point in approximate pixels (see
//! [`consts::CELL_PIXELS`]), and once the drag has gone far enough along
//! either axis, the axis with the larger displacement decides the direction.
//! A swipe emits at most one direction; the next one needs a new press.
use crate::command::Command;
use crate::consts;
use crate::game::Direction;
use crate::render::{ControlBar, ScreenLayout};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Size};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SwipeTracker {
    /// Minimum displacement along one axis, in pixels
    threshold: u32,
    cell_size: Size,
    /// Pixel coordinates of the press that started the current swipe
    start: Option<(i32, i32)>,
}

impl SwipeTracker {
    pub(crate) fn new(threshold: u32) -> SwipeTracker {
        SwipeTracker {
            threshold,
            cell_size: consts::CELL_PIXELS,
            start: None,
        }
    }

    pub(crate) fn begin(&mut self, pos: Position) {
        self.start = Some(self.pixels(pos));
    }

    /// Process a drag to `pos`.  Returns the direction of the swipe once it
    /// has crossed the threshold, after which tracking stops.
    pub(crate) fn moved(&mut self, pos: Position) -> Option<Direction> {
        let (x0, y0) = self.start?;
        let (x, y) = self.pixels(pos);
        let (dx, dy) = (x - x0, y - y0);
        if dx.unsigned_abs() < self.threshold && dy.unsigned_abs() < self.threshold {
            return None;
        }
        self.start = None;
        if dx.unsigned_abs() > dy.unsigned_abs() {
            Direction::from_vector(dx.signum(), 0)
        } else {
            Direction::from_vector(0, dy.signum())
        }
    }

    pub(crate) fn end(&mut self) {
        self.start = None;
    }

    /// Translate a mouse event on a screen laid out as `layout` into a
    /// command, if it amounts to one
    pub(crate) fn handle_event(
        &mut self,
        ev: MouseEvent,
        layout: &ScreenLayout,
    ) -> Option<Command> {
        let pos = Position::new(ev.column, ev.row);
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.end();
                if let Some(button) = ControlBar::button_at(layout.controls, pos) {
                    return Some(button.command());
                }
                if layout.board.contains(pos) {
                    self.begin(pos);
                }
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => self.moved(pos).map(Command::Move),
            MouseEventKind::Up(_) => {
                self.end();
                None
            }
            _ => None,
        }
    }

    fn pixels(&self, pos: Position) -> (i32, i32) {
        (
            i32::from(pos.x) * i32::from(self.cell_size.width),
            i32::from(pos.y) * i32::from(self.cell_size.height),
        )
    }
}

impl Default for SwipeTracker {
    fn default() -> SwipeTracker {
        SwipeTracker::new(consts::SWIPE_THRESHOLD)
    }
}
