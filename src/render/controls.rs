use crate::command::Command;
use crate::consts;
use crate::game::Direction;
use crate::util::EnumExt;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Position, Rect},
    text::Line,
    widgets::Widget,
};

/// The on-screen buttons beneath the board, for playing with the mouse
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Button {
    Up,
    Down,
    Left,
    Right,
    Pause,
    Restart,
}

impl Button {
    fn width(self) -> u16 {
        match self {
            Button::Up | Button::Down | Button::Left | Button::Right => 5,
            // Wide enough for "[Resume]" too
            Button::Pause => 8,
            Button::Restart => 9,
        }
    }

    fn label(self, running: bool) -> &'static str {
        match self {
            Button::Up => "[ ↑ ]",
            Button::Down => "[ ↓ ]",
            Button::Left => "[ ← ]",
            Button::Right => "[ → ]",
            Button::Pause if running => "[Pause]",
            Button::Pause => "[Resume]",
            Button::Restart => "[Restart]",
        }
    }

    pub(crate) fn command(self) -> Command {
        match self {
            Button::Up => Command::Move(Direction::North),
            Button::Down => Command::Move(Direction::South),
            Button::Left => Command::Move(Direction::West),
            Button::Right => Command::Move(Direction::East),
            Button::Pause => Command::TogglePause,
            Button::Restart => Command::Restart,
        }
    }
}

/// A row of [`Button`]s, centered in whatever area it's drawn in
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ControlBar {
    /// Whether the game is running, which decides the pause button's label
    pub(crate) running: bool,
}

impl ControlBar {
    /// The area occupied by each button when the bar is drawn in `area`
    pub(crate) fn button_areas(area: Rect) -> impl Iterator<Item = (Button, Rect)> {
        let rects = Layout::horizontal(Button::iter().map(Button::width))
            .flex(Flex::Center)
            .spacing(1)
            .split(area);
        Button::iter().zip(rects.iter().copied().collect::<Vec<_>>())
    }

    /// Return the button drawn at `pos` when the bar is drawn in `area`
    pub(crate) fn button_at(area: Rect, pos: Position) -> Option<Button> {
        ControlBar::button_areas(area)
            .find(|(_, rect)| rect.contains(pos))
            .map(|(button, _)| button)
    }
}

impl Widget for ControlBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (button, rect) in ControlBar::button_areas(area) {
            Line::styled(button.label(self.running), consts::BUTTON_STYLE)
                .centered()
                .render(rect, buf);
        }
    }
}
