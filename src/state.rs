//! Lit/dark state for every window in the building.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("window index {index} out of range 1..={max}")]
    OutOfRange { index: u16, max: u16 },
}

/// Fixed-length collection of lit/dark flags, one per window index `1..=N`.
///
/// The length is set at construction and never changes; the only mutation
/// paths are [`WindowState::toggle`] and the all-at-once [`WindowState::set_all`]
/// used by the clear action.
#[derive(Debug, Clone)]
pub struct WindowState {
    lit: Vec<bool>,
}

impl WindowState {
    /// All windows dark.
    pub fn new(window_count: u16) -> Self {
        Self {
            lit: vec![false; usize::from(window_count)],
        }
    }

    pub fn window_count(&self) -> u16 {
        self.lit.len() as u16
    }

    pub fn get(&self, index: u16) -> Result<bool, StateError> {
        let max = self.window_count();
        if index < 1 || index > max {
            return Err(StateError::OutOfRange { index, max });
        }
        Ok(self.lit[usize::from(index - 1)])
    }

    /// Flip exactly one window. Out-of-range indices leave the state
    /// untouched and report the error; callers absorb it silently.
    pub fn toggle(&mut self, index: u16) -> Result<(), StateError> {
        let max = self.window_count();
        if index < 1 || index > max {
            return Err(StateError::OutOfRange { index, max });
        }
        let slot = &mut self.lit[usize::from(index - 1)];
        *slot = !*slot;
        Ok(())
    }

    /// Set every window at once. `set_all(false)` is the clear reset.
    pub fn set_all(&mut self, lit: bool) {
        self.lit.fill(lit);
    }

    /// Ascending indices of all currently lit windows.
    pub fn lit_indices(&self) -> Vec<u16> {
        self.lit
            .iter()
            .enumerate()
            .filter_map(|(i, &lit)| lit.then_some(i as u16 + 1))
            .collect()
    }
}
