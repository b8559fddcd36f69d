//! Switch selection state machine.
//!
//! Digits accumulate in a pending text buffer; Enter parses and commits it.
//! Left/Right step the committed value directly. Any committed candidate is
//! wrapped back into `0..=max` before it is stored: one past the top wraps to
//! 0, one below 0 wraps to the top.

use tracing::debug;

/// Key events the selector understands. Everything else maps to `Other`,
/// which is a guaranteed no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    Digit(u8),
    Backspace,
    Enter,
    Left,
    Right,
    Other,
}

#[derive(Debug, Clone)]
pub struct InputSelector {
    value: u16,
    buffer: String,
    max: u16,
}

impl InputSelector {
    pub fn new(max: u16) -> Self {
        Self {
            value: 0,
            buffer: String::new(),
            max,
        }
    }

    /// Last committed selection; 0 until the first commit.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// In-progress digit buffer, shown verbatim in the prompt line.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Feed one event through the machine. Returns `Some(value)` when the
    /// event commits a selection, `None` otherwise.
    ///
    /// Left/Right always commit, even when wrapping lands on the previous
    /// value. Enter commits only when the buffer is non-empty.
    pub fn handle(&mut self, event: SelectorEvent) -> Option<u16> {
        match event {
            SelectorEvent::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.buffer.push(c);
                }
                None
            }
            SelectorEvent::Backspace => {
                self.buffer.pop();
                None
            }
            SelectorEvent::Left => Some(self.commit(i64::from(self.value) - 1)),
            SelectorEvent::Right => Some(self.commit(i64::from(self.value) + 1)),
            SelectorEvent::Enter => {
                if self.buffer.is_empty() {
                    return None;
                }
                // A buffer too long even for u32 still wraps to 0 below.
                let candidate = self.buffer.parse::<u32>().unwrap_or(u32::MAX);
                self.buffer.clear();
                Some(self.commit(i64::from(candidate)))
            }
            SelectorEvent::Other => None,
        }
    }

    /// Reset to the initial state without signaling a commit.
    pub fn clear(&mut self) {
        self.value = 0;
        self.buffer.clear();
    }

    fn commit(&mut self, candidate: i64) -> u16 {
        self.value = if candidate > i64::from(self.max) {
            0
        } else if candidate < 0 {
            self.max
        } else {
            candidate as u16
        };
        debug!(value = self.value, "selection committed");
        self.value
    }
}
