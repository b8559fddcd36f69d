//! Input seam between the controller loop and the terminal.
//!
//! The loop only ever talks to [`InputDriver`]; the crossterm-backed
//! [`ConsoleInputDriver`] is the production implementation, and tests swap in
//! scripted drivers.

mod console;
mod input_driver;
mod keyboard;

pub use console::ConsoleInputDriver;
pub use input_driver::InputDriver;
pub use keyboard::KeyboardNormalizer;
