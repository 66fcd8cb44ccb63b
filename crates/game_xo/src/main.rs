//! Game XO - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use game_xo::{Cli, Command, GameConfig, Session, init_file_tracing, init_stderr_tracing};
use tracing::{info, instrument};
use xo_core::RandomBot;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or_default() {
        Command::Play { bot_delay_ms, seed } => run_play(config, bot_delay_ms, seed).await,
        Command::Replay { cells } => {
            init_stderr_tracing(config.log_filter());
            println!("{}", game_xo::replay(&cells));
            Ok(())
        }
    }
}

/// Run the interactive game
#[instrument(skip(config))]
async fn run_play(config: GameConfig, bot_delay_ms: Option<u64>, seed: Option<u64>) -> Result<()> {
    let config = match bot_delay_ms {
        Some(ms) => config.with_bot_delay_ms(ms),
        None => config,
    };
    init_file_tracing(config.log_file(), config.log_filter())?;

    let bot = match seed {
        Some(seed) => RandomBot::seeded(seed),
        None => RandomBot::new(),
    };
    info!(delay_ms = *config.bot_delay_ms(), ?seed, "Starting game");

    let (session, event_rx) = Session::new(config.bot_delay(), bot);
    game_xo::tui::run_tui(session, event_rx).await
}
