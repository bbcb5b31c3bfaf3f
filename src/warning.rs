//! A dismissable pop-up for problems the player should know about but that
//! don't stop the game, such as the best score not being saved
use crate::command::Command;
use crate::game::Direction;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use std::borrow::Cow;
use std::error::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
    scroll_offset: usize,
}

impl Warning {
    const MAX_LINES: u16 = 16;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    /// A warning describing `e` followed by its chain of causes
    pub(crate) fn from_error(e: &dyn Error) -> Warning {
        let mut warning = Warning {
            lines: Vec::new(),
            scroll_offset: 0,
        };
        warning.push_wrapped(&e.to_string(), "", "");
        let causes = std::iter::successors(e.source(), |&src| src.source())
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if !causes.is_empty() {
            warning.lines.push(String::new());
            warning.lines.push(String::from("Caused by:"));
            if let [cause] = causes.as_slice() {
                warning.push_wrapped(cause, "    ", "    ");
            } else {
                for (i, cause) in causes.iter().enumerate() {
                    warning.push_wrapped(cause, &format!("{i:>5}: "), "       ");
                }
            }
        }
        warning
    }

    /// A warning that the best score can't be saved because of `e`
    pub(crate) fn storage_unavailable(e: &dyn Error) -> Warning {
        let mut warning = Warning::from_error(e);
        warning.lines.push(String::new());
        warning.push_wrapped(
            "Your best score will be lost when you quit.",
            "",
            "",
        );
        warning
    }

    fn push_wrapped(&mut self, text: &str, initial_indent: &str, subsequent_indent: &str) {
        let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
            .break_words(true)
            .initial_indent(initial_indent)
            .subsequent_indent(subsequent_indent);
        self.lines
            .extend(textwrap::wrap(text, opts).into_iter().map(Cow::into_owned));
    }

    fn max_scroll(&self) -> usize {
        self.lines
            .len()
            .saturating_sub(usize::from(Warning::MAX_LINES))
    }

    fn scrolling(&self) -> bool {
        self.max_scroll() > 0
    }

    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter | Command::TogglePause => return Some(WarningOutcome::Dismissed),
            Command::Quit => return Some(WarningOutcome::Quit),
            Command::Move(Direction::North) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            Command::Move(Direction::South) => {
                self.scroll_offset = self.scroll_offset.saturating_add(1).min(self.max_scroll());
            }
            _ => (),
        }
        None
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl Widget for &Warning {
    // `area` is the area of the entire display, not just the pop-up.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .min(Warning::MAX_LINES)
            .saturating_add(4);
        let block_area = center_rect(
            area,
            Size {
                width: Warning::WIDTH.saturating_add(u16::from(self.scrolling()) * 2),
                height,
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        let visible = Text::from_iter(
            self.lines
                .iter()
                .skip(self.scroll_offset)
                .take(usize::from(Warning::MAX_LINES))
                .map(String::as_str),
        );
        if self.scrolling() {
            let [text_area, scrollbar_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)])
                    .flex(Flex::Start)
                    .spacing(1)
                    .areas(text_area);
            visible.render(text_area, buf);
            let mut state = ScrollbarState::new(self.max_scroll()).position(self.scroll_offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .track_symbol(Some(ratatui::symbols::shade::MEDIUM))
                .render(scrollbar_area, buf, &mut state);
        } else {
            visible.render(text_area, buf);
        }
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}
