//! # tictac4d
//!
//! Five-in-a-row on a 5x5x5x5 lattice. A mark wins when it completes a
//! straight line of five of its player's marks in any direction through
//! four-dimensional space.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: lattice, neighbor scan, line checks, win detection, session
//! - [`cli`] — Line-oriented text front end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
