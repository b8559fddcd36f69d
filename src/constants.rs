//! Shared crate-wide constants.

/// Number of simulated windows in a session. Fixed at startup; every window
/// index lives in `1..=WINDOW_COUNT`.
pub const WINDOW_COUNT: u16 = 100;

/// Windows laid out on each floor of the building.
pub const WINDOWS_PER_FLOOR: u16 = 10;

/// Interior width of one window box, in terminal columns. The drawn box is
/// one column wider because box corners sit on the outer edge.
pub const WINDOW_WIDTH: u16 = 4;

/// Interior height of one window box, in terminal rows.
pub const WINDOW_HEIGHT: u16 = 2;

/// Horizontal gap between adjacent window boxes on a floor.
pub const WINDOW_X_SPACE: u16 = 1;

/// Vertical gap between floors.
pub const WINDOW_Y_SPACE: u16 = 1;

/// Columns between the building wall and the first window of a floor.
pub const WINDOW_X_PAD: u16 = 2;

/// Rows between the roof and the top floor of windows.
pub const WINDOW_Y_PAD: u16 = 1;

/// Rows taken by the sloped roof above the walls.
pub const ROOF_HEIGHT: u16 = 3;
