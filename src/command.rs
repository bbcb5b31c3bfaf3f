use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Move(Direction),
    TogglePause,
    /// Reset the board and wait for the player to move
    Reset,
    /// Reset the board and start moving immediately
    Restart,
    Enter,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if (ev.modifiers, ev.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Command::Quit);
        }
        if !normal_modifiers.contains(ev.modifiers) {
            return None;
        }
        match ev.code {
            KeyCode::Char('w' | 'W' | 'k') | KeyCode::Up => Some(Command::Move(Direction::North)),
            KeyCode::Char('s' | 'S' | 'j') | KeyCode::Down => {
                Some(Command::Move(Direction::South))
            }
            KeyCode::Char('a' | 'A' | 'h') | KeyCode::Left => {
                Some(Command::Move(Direction::West))
            }
            KeyCode::Char('d' | 'D' | 'l') | KeyCode::Right => {
                Some(Command::Move(Direction::East))
            }
            KeyCode::Char(' ') | KeyCode::Esc => Some(Command::TogglePause),
            KeyCode::Char('r' | 'R') => Some(Command::Reset),
            KeyCode::Enter => Some(Command::Enter),
            KeyCode::Char('q' | 'Q') => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Move(Direction::North)))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Move(Direction::North)))]
    #[case(KeyCode::Char('W'), KeyModifiers::SHIFT, Some(Command::Move(Direction::North)))]
    #[case(KeyCode::Char('j'), KeyModifiers::NONE, Some(Command::Move(Direction::South)))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Move(Direction::West)))]
    #[case(KeyCode::Char('d'), KeyModifiers::NONE, Some(Command::Move(Direction::East)))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Command::TogglePause))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::TogglePause))]
    #[case(KeyCode::Char('r'), KeyModifiers::NONE, Some(Command::Reset))]
    #[case(KeyCode::Char('R'), KeyModifiers::SHIFT, Some(Command::Reset))]
    #[case(KeyCode::Enter, KeyModifiers::NONE, Some(Command::Enter))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('w'), KeyModifiers::CONTROL, None)]
    #[case(KeyCode::Char('x'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Tab, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(
            Command::from_key_event(KeyEvent::new(code, modifiers)),
            cmd
        );
    }
}
