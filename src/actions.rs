use crossterm::event::{KeyCode, KeyEvent};

use crate::selector::SelectorEvent;

/// What a key press means to the controller. Quit and clear are side bands;
/// everything else is routed to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Clear,
    Selector(SelectorEvent),
}

/// Classify a key event. Unrecognized keys become `Selector(Other)`, which
/// the selector ignores, so every key has a defined (possibly empty) meaning.
pub fn classify(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        KeyCode::Char('c') | KeyCode::Char('C') => Action::Clear,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Action::Selector(SelectorEvent::Digit(c as u8 - b'0'))
        }
        KeyCode::Backspace => Action::Selector(SelectorEvent::Backspace),
        KeyCode::Enter => Action::Selector(SelectorEvent::Enter),
        KeyCode::Left => Action::Selector(SelectorEvent::Left),
        KeyCode::Right => Action::Selector(SelectorEvent::Right),
        _ => Action::Selector(SelectorEvent::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_and_clear_both_cases() {
        assert_eq!(classify(&key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(classify(&key(KeyCode::Char('Q'))), Action::Quit);
        assert_eq!(classify(&key(KeyCode::Char('c'))), Action::Clear);
        assert_eq!(classify(&key(KeyCode::Char('C'))), Action::Clear);
    }

    #[test]
    fn digits_map_to_their_value() {
        assert_eq!(
            classify(&key(KeyCode::Char('0'))),
            Action::Selector(SelectorEvent::Digit(0))
        );
        assert_eq!(
            classify(&key(KeyCode::Char('7'))),
            Action::Selector(SelectorEvent::Digit(7))
        );
    }

    #[test]
    fn navigation_and_editing_keys() {
        assert_eq!(
            classify(&key(KeyCode::Left)),
            Action::Selector(SelectorEvent::Left)
        );
        assert_eq!(
            classify(&key(KeyCode::Right)),
            Action::Selector(SelectorEvent::Right)
        );
        assert_eq!(
            classify(&key(KeyCode::Enter)),
            Action::Selector(SelectorEvent::Enter)
        );
        assert_eq!(
            classify(&key(KeyCode::Backspace)),
            Action::Selector(SelectorEvent::Backspace)
        );
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(
            classify(&key(KeyCode::Char('x'))),
            Action::Selector(SelectorEvent::Other)
        );
        assert_eq!(
            classify(&key(KeyCode::Esc)),
            Action::Selector(SelectorEvent::Other)
        );
        assert_eq!(
            classify(&key(KeyCode::Up)),
            Action::Selector(SelectorEvent::Other)
        );
    }
}
