//! Headless replay of a scripted move sequence.

use std::fmt::Write;
use tracing::{info, instrument, warn};
use xo_core::GameState;

/// Plays `cells` in order (X first, no bot) and renders each applied move.
///
/// Rejected moves are reported inline and skipped, like ignored clicks.
#[instrument]
pub fn replay(cells: &[usize]) -> String {
    let mut game = GameState::new();
    let mut out = String::new();

    for &cell in cells {
        match game.play_index(cell) {
            Ok(mv) => {
                let _ = writeln!(out, "Move #{}: {}\n{}\n", game.step(), mv, game.board().display());
            }
            Err(e) => {
                warn!(cell, error = %e, "Skipping scripted move");
                let _ = writeln!(out, "Skipped cell {}: {}\n", cell, e);
            }
        }
    }

    let view = game.view();
    info!(outcome = ?view.outcome, moves = game.step(), "Replay finished");
    out.push_str(&view.status);
    out
}
