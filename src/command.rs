use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A logical input, decoded from a key press
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Up,
    Down,
    Left,
    Right,
    Start,
    Quit,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (m, _) if !normal_modifiers.contains(m) => None,
            (_, KeyCode::Char('w' | 'W' | 'k' | 'K') | KeyCode::Up) => Some(Command::Up),
            (_, KeyCode::Char('s' | 'S' | 'j' | 'J') | KeyCode::Down) => Some(Command::Down),
            (_, KeyCode::Char('a' | 'A' | 'h' | 'H') | KeyCode::Left) => Some(Command::Left),
            (_, KeyCode::Char('d' | 'D' | 'l' | 'L') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(Command::Start),
            (_, KeyCode::Char('q' | 'Q') | KeyCode::Esc) => Some(Command::Quit),
            _ => None,
        }
    }
}
