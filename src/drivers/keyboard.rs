use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Normalizes the raw crossterm event stream before the puzzle consumes it.
///
/// Windows terminals report key releases and repeats as separate events;
/// passing those through would double- or triple-fire every toggle, so only
/// `Press` key events survive. Terminals also disagree on Shift+Tab: some
/// report `BackTab`, others `Tab` with the shift modifier, so the latter is
/// rewritten to the former. Non-key events pass through untouched.
#[derive(Debug, Default)]
pub struct KeyboardNormalizer;

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(&mut self, evt: Event) -> Option<Event> {
        match evt {
            Event::Key(mut key) => {
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
                    key.code = KeyCode::BackTab;
                    key.modifiers.remove(KeyModifiers::SHIFT);
                }
                Some(Event::Key(key))
            }
            other => Some(other),
        }
    }
}
