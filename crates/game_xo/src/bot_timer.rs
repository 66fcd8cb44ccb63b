//! Cancelable delay between the bot deciding on a move and playing it.

use crate::session::GameEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};
use xo_core::BotMove;

/// Holds at most one pending bot move.
///
/// The pending move is delivered as [`GameEvent::BotMove`] on the session's
/// event channel once the delay elapses. Scheduling again or cancelling
/// aborts the pending task, so a superseded move is never delivered.
#[derive(Debug)]
pub struct BotTimer {
    delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    pending: Option<JoinHandle<()>>,
}

impl BotTimer {
    /// Creates a timer that delivers onto `event_tx`.
    pub fn new(delay: Duration, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self {
            delay,
            event_tx,
            pending: None,
        }
    }

    /// True until the pending move has been sent on the channel.
    ///
    /// A sent move may still be queued for the session, so this is not the
    /// same as "not yet applied"; see [`Session::bot_pending`](crate::Session::bot_pending).
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Schedules `bot_move`, replacing any pending one.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, bot_move: BotMove) {
        self.cancel();
        let tx = self.event_tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone only when the session has shut down.
            let _ = tx.send(GameEvent::BotMove(bot_move));
        }));
        debug!("Bot move scheduled");
    }

    /// Drops the pending move, if any.
    pub fn cancel(&mut self) {
        if self.is_pending() {
            debug!("Cancelling pending bot move");
        }
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for BotTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
