//! Interactive terminal simulation of the toggle-the-multiples window
//! puzzle: a building of numbered windows where pressing switch `k` flips
//! every window whose index is a multiple of `k`.
//!
//! The state engine ([`engine`], [`state`]), selection machine
//! ([`selector`]) and geometry ([`layout`]) are headless so their invariants
//! can be tested without a terminal; [`ui`] and [`drivers`] hold the
//! crossterm/ratatui edges.

pub mod actions;
pub mod app;
pub mod constants;
pub mod drivers;
pub mod engine;
pub mod event_loop;
pub mod layout;
pub mod selector;
pub mod state;
pub mod tracing_sub;
pub mod ui;
