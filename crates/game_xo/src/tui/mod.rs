//! Terminal UI for Game XO.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Focus};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use crate::session::{GameEvent, Session};

/// Input poll interval; bounds how late a delivered bot move is drawn.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the TUI until the user quits.
pub async fn run_tui<R: Rng>(
    session: Session<R>,
    event_rx: mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    info!("Starting Game XO TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(session), event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, drain delivered bot moves, then wait briefly for a key.
#[instrument(skip_all)]
async fn run_app<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<R>,
    mut event_rx: mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.dispatch(event);
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key.code);
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}
