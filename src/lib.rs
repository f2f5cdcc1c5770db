//! Turn-based grid snake.
//!
//! The core (`board`, `snake`, `locator`, `engine`) holds no I/O. The
//! `input`, `term` and `game` modules wire it to a line-oriented terminal.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod input;
pub mod locator;
pub mod snake;
pub mod term;

/// A `(column, row)` pair on the board.
pub type Coords = (i32, i32);

/// Sentinel for "not found" / "no position yet".
pub const NO_POSITION: Coords = (-1, -1);
