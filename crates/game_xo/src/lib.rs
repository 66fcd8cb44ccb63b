//! Game XO - terminal tic-tac-toe against a random-move bot.
//!
//! # Architecture
//!
//! - **Session**: serializes clicks, jumps, restarts and bot moves into one
//!   ordered stream of transitions on a [`xo_core::GameState`]
//! - **BotTimer**: the cancelable delay between the bot deciding and moving
//! - **TUI**: ratatui board, move list and status line
//! - **Config/CLI**: TOML settings with command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bot_timer;
mod cli;
mod config;
mod replay;
mod session;
mod telemetry;
pub mod tui;

pub use bot_timer::BotTimer;
pub use cli::{Cli, Command};
pub use config::{ConfigError, ConfigErrorKind, GameConfig};
pub use replay::replay;
pub use session::{GameEvent, Session};
pub use telemetry::{init_file_tracing, init_stderr_tracing};
