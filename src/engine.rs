//! The multiple-toggle rule: selecting switch `k` flips every window whose
//! index is a multiple of `k`.

use tracing::debug;

use crate::state::WindowState;

#[derive(Debug, Clone, Copy)]
pub struct ToggleEngine {
    max: u16,
}

impl ToggleEngine {
    pub fn new(max: u16) -> Self {
        Self { max }
    }

    /// Apply switch `switch` to `state` and return the ascending list of
    /// toggled window indices.
    ///
    /// A switch outside `1..=max` is a no-op with an empty change list; the
    /// selector already range-validates upstream, this re-check just keeps
    /// the engine total. Applying the same switch twice with no mutation in
    /// between restores the prior state.
    pub fn apply(&self, state: &mut WindowState, switch: u16) -> Vec<u16> {
        if switch < 1 || switch > self.max {
            return Vec::new();
        }
        let mut changed = Vec::with_capacity(usize::from(self.max / switch));
        let mut window = switch;
        while window <= self.max {
            if state.toggle(window).is_ok() {
                changed.push(window);
            }
            window += switch;
        }
        debug!(switch, toggled = changed.len(), "applied switch");
        changed
    }
}
