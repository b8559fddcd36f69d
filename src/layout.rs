//! Pure building geometry: maps a 1-based window index to its screen
//! position for an arbitrary window count and per-floor width.
//!
//! Nothing here touches the terminal; the renderer and the tests both consume
//! the same offsets, so layout invariants can be checked headlessly.

use crate::constants::{
    ROOF_HEIGHT, WINDOW_HEIGHT, WINDOW_WIDTH, WINDOW_X_PAD, WINDOW_X_SPACE, WINDOW_Y_PAD,
    WINDOW_Y_SPACE, WINDOWS_PER_FLOOR,
};

#[derive(Debug, Clone, Copy)]
pub struct BuildingLayout {
    window_count: u16,
    windows_per_floor: u16,
    window_width: u16,
    window_height: u16,
    x_space: u16,
    y_space: u16,
    x_pad: u16,
    y_pad: u16,
    roof_height: u16,
}

impl BuildingLayout {
    /// Layout for `window_count` windows using the crate default geometry.
    ///
    /// Behavior for `window_count == 0` is unspecified; callers construct
    /// sessions with at least one window.
    pub fn with_defaults(window_count: u16) -> Self {
        Self {
            window_count,
            windows_per_floor: WINDOWS_PER_FLOOR,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            x_space: WINDOW_X_SPACE,
            y_space: WINDOW_Y_SPACE,
            x_pad: WINDOW_X_PAD,
            y_pad: WINDOW_Y_PAD,
            roof_height: ROOF_HEIGHT,
        }
    }

    pub fn window_count(&self) -> u16 {
        self.window_count
    }

    pub fn window_width(&self) -> u16 {
        self.window_width
    }

    pub fn window_height(&self) -> u16 {
        self.window_height
    }

    pub fn roof_height(&self) -> u16 {
        self.roof_height
    }

    pub fn floor_count(&self) -> u16 {
        self.window_count.div_ceil(self.windows_per_floor)
    }

    /// Floor of window `index`, counted from the top of the building.
    pub fn row(&self, index: u16) -> u16 {
        (index - 1) / self.windows_per_floor
    }

    /// Position of window `index` within its floor.
    pub fn col(&self, index: u16) -> u16 {
        (index - 1) % self.windows_per_floor
    }

    /// Column of the window box's upper-left corner.
    pub fn offset_x(&self, index: u16) -> u16 {
        self.col(index) * (self.window_width + self.x_space) + self.x_pad
    }

    /// Row of the window box's upper-left corner.
    pub fn offset_y(&self, index: u16) -> u16 {
        self.row(index) * (self.window_height + self.y_space) + self.roof_height + self.y_pad
    }

    /// Building width in columns; constant for a given per-floor geometry.
    pub fn building_width(&self) -> u16 {
        self.windows_per_floor * (self.window_width + self.x_space) + 2 * self.x_pad - 1
    }

    /// Row of the building's bottom wall, one past the lowest floor.
    pub fn building_height(&self) -> u16 {
        self.roof_height + self.floor_count() * (self.window_height + self.y_pad) + 1
    }
}
