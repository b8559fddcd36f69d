//! The controller: owns all puzzle state and turns classified key events
//! into state transitions.

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::actions::{self, Action};
use crate::engine::ToggleEngine;
use crate::event_loop::ControlFlow;
use crate::selector::InputSelector;
use crate::state::WindowState;

pub struct App {
    windows: WindowState,
    engine: ToggleEngine,
    selector: InputSelector,
    last_changes: Vec<u16>,
}

impl App {
    pub fn new(window_count: u16) -> Self {
        Self {
            windows: WindowState::new(window_count),
            engine: ToggleEngine::new(window_count),
            selector: InputSelector::new(window_count),
            last_changes: Vec::new(),
        }
    }

    pub fn windows(&self) -> &WindowState {
        &self.windows
    }

    pub fn selector(&self) -> &InputSelector {
        &self.selector
    }

    /// Window indices toggled by the most recent apply; display feedback
    /// only, replaced wholesale on every commit.
    pub fn last_changes(&self) -> &[u16] {
        &self.last_changes
    }

    /// Handle one key press. Quit is the only path out of the loop; clear
    /// and selector input both continue.
    pub fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        match actions::classify(key) {
            Action::Quit => ControlFlow::Quit,
            Action::Clear => {
                self.clear();
                ControlFlow::Continue
            }
            Action::Selector(event) => {
                if let Some(value) = self.selector.handle(event) {
                    self.last_changes = self.engine.apply(&mut self.windows, value);
                }
                ControlFlow::Continue
            }
        }
    }

    /// Back to the initial session state: all windows dark, selector at 0
    /// with an empty buffer, no change feedback.
    pub fn clear(&mut self) {
        debug!("clearing session state");
        self.windows.set_all(false);
        self.selector.clear();
        self.last_changes.clear();
    }
}
