//! # Hangman
//!
//! Guess the word one letter at a time before the figure on the gallows is
//! complete. Features a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: word list, round state machine, session
//!   scoring, gallows drawing table
//! - [`ui`] — Terminal UI: gallows canvas, keyboard, replay prompt
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
