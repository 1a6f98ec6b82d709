//! # Connect Four
//!
//! A two-player Connect Four engine with three computer opponents of
//! increasing strength, a terminal UI built with Ratatui, and a headless
//! arena for computer-vs-computer matches.
//!
//! ## Modules
//!
//! - [`game`] — Board, win/draw detection, and the game session state machine
//! - [`ai`] — Position evaluator and the Easy, Medium and Hard strategies
//! - [`stats`] — In-memory per-mode game statistics
//! - [`ui`] — Terminal UI: menu, game view, statistics screen
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod stats;
pub mod ui;
