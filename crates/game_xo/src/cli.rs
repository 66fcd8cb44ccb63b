//! Command-line interface for game_xo.

use clap::{Parser, Subcommand};

/// Game XO - tic-tac-toe against a random-move bot
#[derive(Parser, Debug)]
#[command(name = "game_xo")]
#[command(about = "Tic-tac-toe against a random-move bot, with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "game_xo.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Override the bot's move delay in milliseconds
        #[arg(long)]
        bot_delay_ms: Option<u64>,

        /// Seed the bot for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Apply a scripted sequence of cell indices (0-8) and print each board
    Replay {
        /// Cell indices, X first, alternating
        #[arg(required = true)]
        cells: Vec<usize>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            bot_delay_ms: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["game_xo"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from(["game_xo", "play", "--bot-delay-ms", "100", "--seed", "9"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                bot_delay_ms: Some(100),
                seed: Some(9),
            })
        );
    }

    #[test]
    fn test_replay_cells() {
        let cli = Cli::try_parse_from(["game_xo", "replay", "0", "3", "1"]).unwrap();
        assert_eq!(cli.command, Some(Command::Replay { cells: vec![0, 3, 1] }));
    }

    #[test]
    fn test_replay_requires_cells() {
        assert!(Cli::try_parse_from(["game_xo", "replay"]).is_err());
    }
}
