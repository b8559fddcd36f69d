use std::io;
use std::time::Duration;

use crossterm::event::Event;

use super::InputDriver;
use super::keyboard::KeyboardNormalizer;

/// Crossterm-backed input driver for the real terminal.
pub struct ConsoleInputDriver {
    normalizer: KeyboardNormalizer,
}

impl Default for ConsoleInputDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self {
            normalizer: KeyboardNormalizer::new(),
        }
    }
}

impl InputDriver for ConsoleInputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        // Release/repeat events are swallowed by the normalizer; keep reading
        // until something user-visible arrives.
        loop {
            let evt = crossterm::event::read()?;
            if let Some(normalized) = self.normalizer.normalize(evt) {
                return Ok(normalized);
            }
        }
    }
}
