//! Key mapping for the terminal front end.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::mystery::session::SessionInput;

/// Map a terminal key event to a session input. Key releases are ignored.
pub fn map_key(key: KeyEvent) -> SessionInput {
    if key.kind == KeyEventKind::Release {
        return SessionInput::Other;
    }

    match key.code {
        KeyCode::Up => SessionInput::Up,
        KeyCode::Down => SessionInput::Down,
        KeyCode::Left => SessionInput::Left,
        KeyCode::Right => SessionInput::Right,
        KeyCode::Char(' ') => SessionInput::Roll,
        KeyCode::Char('s') | KeyCode::Char('S') => SessionInput::Suggest,
        KeyCode::Char('a') | KeyCode::Char('A') => SessionInput::Accuse,
        KeyCode::Char('h') | KeyCode::Char('H') => SessionInput::AskHint,
        KeyCode::Char('i') | KeyCode::Char('I') => SessionInput::ToggleInstructions,
        KeyCode::Char('l') | KeyCode::Char('L') => SessionInput::ToggleNotes,
        KeyCode::Enter => SessionInput::Confirm,
        KeyCode::Esc => SessionInput::Cancel,
        KeyCode::Char('q') | KeyCode::Char('Q') => SessionInput::Quit,
        _ => SessionInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows() {
        assert_eq!(map_key(press(KeyCode::Up)), SessionInput::Up);
        assert_eq!(map_key(press(KeyCode::Down)), SessionInput::Down);
        assert_eq!(map_key(press(KeyCode::Left)), SessionInput::Left);
        assert_eq!(map_key(press(KeyCode::Right)), SessionInput::Right);
    }

    #[test]
    fn test_letters_case_insensitive() {
        assert_eq!(map_key(press(KeyCode::Char('s'))), SessionInput::Suggest);
        assert_eq!(map_key(press(KeyCode::Char('S'))), SessionInput::Suggest);
        assert_eq!(map_key(press(KeyCode::Char('L'))), SessionInput::ToggleNotes);
        assert_eq!(
            map_key(press(KeyCode::Char('i'))),
            SessionInput::ToggleInstructions
        );
    }

    #[test]
    fn test_roll_confirm_cancel() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), SessionInput::Roll);
        assert_eq!(map_key(press(KeyCode::Enter)), SessionInput::Confirm);
        assert_eq!(map_key(press(KeyCode::Esc)), SessionInput::Cancel);
        assert_eq!(map_key(press(KeyCode::Char('q'))), SessionInput::Quit);
    }

    #[test]
    fn test_unmapped_and_release() {
        assert_eq!(map_key(press(KeyCode::Char('z'))), SessionInput::Other);

        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), SessionInput::Other);
    }
}
