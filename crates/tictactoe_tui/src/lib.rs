//! Themed terminal front-end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **App**: presentation state (cursor, focus, theme) around a
//!   [`tictactoe_core::GameEngine`], turning key presses into engine intents
//! - **UI**: stateless ratatui rendering of the engine snapshot
//! - **Config / CLI**: TOML settings with command-line overrides
//! - **Replay**: headless application of a move list

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod terminal;
mod theme;
pub mod ui;

pub use app::{App, AppAction, Focus, Notice};
pub use cli::{Cli, Command, MoveList};
pub use config::{AppConfig, ConfigError};
pub use theme::{Palette, ThemeMode};
