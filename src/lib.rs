//! # Peg Tower
//!
//! A multi-peg Tower of Hanoi: a board that enforces the size rule on every
//! move, and planners that transfer a whole stack with three or four pegs.
//!
//! ## Modules
//!
//! - [`game`] — Disks, pegs, the board, and replayable move sequences
//! - [`solver`] — Three- and four-peg transfer planners
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod solver;
