//! # Connect Four TUI
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! The board engine (grid state, gravity drops, turn alternation, and the
//! four-axis win detector) is pure and UI-free; the terminal shell maps key
//! input onto engine calls and renders the result.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: event loop, game view, end-of-game dialog
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
